// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::projection::GoalProjection;
use crate::calc::{self, CalcOptions, Summary};
use crate::models::Profile;
use crate::store;
use crate::utils::{
    as_of_or_today, fmt_money, fmt_money_whole, fmt_pct, get_currency_symbol, maybe_print_json,
    pretty_table,
};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Loads the stored profile and runs the calculator for `as_of`'s month.
pub fn compute(conn: &Connection, as_of: NaiveDate) -> Result<Summary> {
    let profile = store::load_profile(conn)?;
    evaluate_profile(conn, &profile, as_of)
}

fn evaluate_profile(conn: &Connection, profile: &Profile, as_of: NaiveDate) -> Result<Summary> {
    let opts = CalcOptions {
        currency_symbol: get_currency_symbol(conn)?,
    };
    Ok(calc::evaluate_with(profile, as_of, &opts))
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let as_of = as_of_or_today(m.get_one::<String>("as-of"))?;
    let profile = store::load_profile(conn)?;
    let summary = evaluate_profile(conn, &profile, as_of)?;
    if maybe_print_json(m.get_flag("json"), false, &summary)? {
        return Ok(());
    }
    let monthly_savings = profile.inputs().current_monthly_savings;
    let symbol = get_currency_symbol(conn)?;
    let money = |v: f64| fmt_money(&symbol, v);
    let t = &summary.totals;
    let g = &summary.guidelines;

    println!("Budget summary for {}", summary.as_of.format("%B %Y"));
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["Net worth".into(), money(summary.net_worth)],
                vec!["Total assets".into(), money(t.total_assets)],
                vec!["Total debts".into(), money(t.total_debts)],
                vec!["Expenses (all time)".into(), money(t.total_expenses)],
                vec!["Savings rate".into(), fmt_pct(summary.savings_rate * 100.0)],
                vec![
                    "Emergency fund".into(),
                    format!(
                        "{} (target {})",
                        money(t.emergency_fund),
                        money(t.recommended_emergency_fund)
                    ),
                ],
                vec![
                    "Projected monthly savings".into(),
                    money(summary.projections.projected_monthly_savings),
                ],
            ],
        )
    );

    println!("50/30/20: {}", g.status);
    println!(
        "{}",
        pretty_table(
            &["Bucket", "This month", "% of in-hand", "Target"],
            vec![
                vec![
                    "Needs".into(),
                    money(t.fixed_spending),
                    fmt_pct(g.needs_pct),
                    format!("<= {}", money(g.needs_max)),
                ],
                vec![
                    "Wants".into(),
                    money(t.variable_spending),
                    fmt_pct(g.wants_pct),
                    format!("<= {}", money(g.wants_max)),
                ],
                vec![
                    "Saving".into(),
                    money(monthly_savings),
                    fmt_pct(g.savings_pct),
                    format!(">= {}", money(g.savings_min)),
                ],
            ],
        )
    );

    let goals: Vec<&GoalProjection> = [
        &summary.projections.retirement,
        &summary.projections.house,
        &summary.projections.education,
    ]
    .into_iter()
    .filter(|p| p.is_set())
    .collect();
    if !goals.is_empty() {
        let rows = goals
            .iter()
            .map(|p| {
                vec![
                    p.kind.label().to_string(),
                    fmt_money_whole(&symbol, p.target),
                    format!("{}", p.years),
                    money(p.required_monthly),
                    money(p.contribution),
                    fmt_money_whole(&symbol, p.projected_value),
                    fmt_pct(p.coverage * 100.0),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Goal", "Target", "Years", "Needed/mo", "Investing/mo", "Projected", "Coverage"],
                rows,
            )
        );
    }

    if !summary.spending_by_category.is_empty() {
        let rows = summary
            .spending_by_category
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    if c.need { "need" } else { "want" }.to_string(),
                    money(c.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Bucket", "Spent this month"], rows)
        );
    }

    print_recommendations(&summary.recommendations);
    Ok(())
}

fn print_recommendations(recs: &[String]) {
    println!("Recommendations (rule-based, not professional financial advice):");
    for (n, r) in recs.iter().enumerate() {
        println!("{:>2}. {}", n + 1, r);
    }
}

pub fn advise(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let as_of = as_of_or_today(m.get_one::<String>("as-of"))?;
    let summary = compute(conn, as_of)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary.recommendations)? {
        print_recommendations(&summary.recommendations);
    }
    Ok(())
}
