// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sums over the profile: debts, assets, net worth, and the current-month
//! needs/wants split of recorded expenses.

use crate::models::{Expense, FinancialInputs};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_debts: f64,
    pub total_assets: f64,
    pub net_worth: f64,
    pub total_expenses: f64,
    pub fixed_spending: f64,
    pub variable_spending: f64,
    pub emergency_fund: f64,
    pub recommended_emergency_fund: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthSplit {
    pub fixed: f64,
    pub variable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub need: bool,
    pub amount: f64,
}

/// Balances that count toward debt; card count and APRs are informational.
pub fn total_debts(i: &FinancialInputs) -> f64 {
    [
        i.mortgage,
        i.car_loan,
        i.credit_cards,
        i.personal_loan,
        i.student_loan,
        i.other_debt,
    ]
    .iter()
    .sum()
}

pub fn total_assets(i: &FinancialInputs) -> f64 {
    [
        i.cash,
        i.savings_account,
        i.checking_account,
        i.hsa,
        i.investments,
        i.retirement,
        i.property,
        i.other_assets,
    ]
    .iter()
    .sum()
}

pub fn net_worth(i: &FinancialInputs) -> f64 {
    total_assets(i) - total_debts(i)
}

/// Cash, savings and checking: money reachable without selling anything.
pub fn emergency_fund(i: &FinancialInputs) -> f64 {
    i.cash + i.savings_account + i.checking_account
}

pub fn recommended_emergency_fund(i: &FinancialInputs) -> f64 {
    if i.monthly_net > 0.0 {
        i.monthly_net * 3.0
    } else {
        0.0
    }
}

/// All-time total of every recorded expense.
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::amount_value).sum()
}

pub fn same_month(date: NaiveDate, as_of: NaiveDate) -> bool {
    date.year() == as_of.year() && date.month() == as_of.month()
}

fn current_month(expenses: &[Expense], as_of: NaiveDate) -> impl Iterator<Item = &Expense> {
    expenses
        .iter()
        .filter(move |e| e.parsed_date().is_some_and(|d| same_month(d, as_of)))
}

/// Splits this month's expenses into needs and everything else. Rows whose
/// date does not parse are left out.
pub fn current_month_split(expenses: &[Expense], as_of: NaiveDate) -> MonthSplit {
    let mut split = MonthSplit::default();
    for e in current_month(expenses, as_of) {
        if e.category.is_need() {
            split.fixed += e.amount_value();
        } else {
            split.variable += e.amount_value();
        }
    }
    split
}

/// This month's spend per category, largest first.
pub fn spending_by_category(expenses: &[Expense], as_of: NaiveDate) -> Vec<CategorySpend> {
    let mut agg: BTreeMap<String, (bool, f64)> = BTreeMap::new();
    for e in current_month(expenses, as_of) {
        let entry = agg
            .entry(e.category.label().to_string())
            .or_insert((e.category.is_need(), 0.0));
        entry.1 += e.amount_value();
    }
    let mut items: Vec<CategorySpend> = agg
        .into_iter()
        .map(|(category, (need, amount))| CategorySpend {
            category,
            need,
            amount,
        })
        .collect();
    items.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    items
}

/// Display order: ascending by date, undated (or unparseable) rows first,
/// ties in insertion order.
pub fn sort_by_date(expenses: &mut [Expense]) {
    expenses.sort_by_key(|e| e.parsed_date());
}

pub fn compute(i: &FinancialInputs, expenses: &[Expense], as_of: NaiveDate) -> Totals {
    let split = current_month_split(expenses, as_of);
    Totals {
        total_debts: total_debts(i),
        total_assets: total_assets(i),
        net_worth: net_worth(i),
        total_expenses: total_expenses(expenses),
        fixed_spending: split.fixed,
        variable_spending: split.variable,
        emergency_fund: emergency_fund(i),
        recommended_emergency_fund: recommended_emergency_fund(i),
    }
}
