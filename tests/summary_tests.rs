// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use nestegg::calc::guidelines::GuidelineStatus;
use nestegg::calc::recommend::NO_DATA_MESSAGE;
use nestegg::commands::summary;
use nestegg::models::NewExpense;
use nestegg::{db, store, utils};
use rusqlite::Connection;

fn conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn spend(conn: &Connection, category: &str, amount: &str, date: &str) {
    store::insert_expense(
        conn,
        NewExpense::validate(category, amount, date, "").unwrap(),
    )
    .unwrap();
}

#[test]
fn empty_database_yields_only_the_fallback() {
    let conn = conn();
    let s = summary::compute(&conn, as_of()).unwrap();
    assert_eq!(s.recommendations, vec![NO_DATA_MESSAGE.to_string()]);
    assert_eq!(s.net_worth, 0.0);
    assert_eq!(s.guidelines.status, GuidelineStatus::NotEnoughData);
}

#[test]
fn balanced_month_is_within_guidelines() {
    let conn = conn();
    store::set_profile_field(&conn, "income.monthlyNet", "5000").unwrap();
    store::set_profile_field(&conn, "income.currentMonthlySavings", "1000").unwrap();
    spend(&conn, "Rent", "2000", "2025-03-01");
    spend(&conn, "Groceries", "1000", "2025-03-09");
    // last month does not count toward the split
    spend(&conn, "Entertainment", "4000", "2025-02-27");

    let s = summary::compute(&conn, as_of()).unwrap();
    assert_eq!(s.totals.fixed_spending, 2000.0);
    assert_eq!(s.totals.variable_spending, 1000.0);
    assert_eq!(s.totals.total_expenses, 7000.0);
    assert!((s.guidelines.needs_pct - 40.0).abs() < 1e-9);
    assert!((s.guidelines.wants_pct - 20.0).abs() < 1e-9);
    assert!((s.savings_rate - 0.2).abs() < 1e-12);
    assert_eq!(s.guidelines.status, GuidelineStatus::WithinGuidelines);
    assert_eq!(s.spending_by_category[0].category, "Rent");
}

#[test]
fn heavy_needs_are_outside_guidelines() {
    let conn = conn();
    store::set_profile_field(&conn, "income.monthlyNet", "3000").unwrap();
    spend(&conn, "Home Loan EMI", "2000", "2025-03-02");
    let s = summary::compute(&conn, as_of()).unwrap();
    assert_eq!(s.guidelines.status, GuidelineStatus::OutsideGuidelines);
    assert!(
        s.recommendations
            .iter()
            .any(|r| r.starts_with("Your fixed costs are about 66.7%"))
    );
}

#[test]
fn net_worth_and_emergency_tiers_follow_stored_fields() {
    let conn = conn();
    store::set_profile_field(&conn, "income.monthlyNet", "5000").unwrap();
    let s = summary::compute(&conn, as_of()).unwrap();
    assert!(
        s.recommendations[0].starts_with("You don't appear to have a liquid emergency fund")
    );

    store::set_profile_field(&conn, "assets.cash", "5000").unwrap();
    store::set_profile_field(&conn, "assets.savingsAccount", "10000").unwrap();
    store::set_profile_field(&conn, "assets.property", "200000").unwrap();
    store::set_profile_field(&conn, "debts.mortgage", "180000").unwrap();
    let s = summary::compute(&conn, as_of()).unwrap();
    assert_eq!(s.totals.total_assets, 215_000.0);
    assert_eq!(s.net_worth, 35_000.0);
    assert!(
        s.recommendations[0].starts_with("Your emergency fund (~$15,000.00) covers 3.0 months")
    );
}

#[test]
fn currency_setting_flows_into_messages() {
    let conn = conn();
    utils::set_setting(&conn, utils::CURRENCY_SYMBOL_KEY, "€").unwrap();
    store::set_profile_field(&conn, "debts.creditCards", "1200").unwrap();
    let s = summary::compute(&conn, as_of()).unwrap();
    assert!(
        s.recommendations
            .iter()
            .any(|r| r.starts_with("You have €1,200.00 of debt and no recorded assets"))
    );
}
