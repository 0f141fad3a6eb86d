// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ExpenseCategory, Profile, parse_expense_date};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Free-text fields; everything else in the profile is read as a number.
const TEXT_FIELDS: &[&str] = &[
    "goals.shortTerm",
    "goals.longTerm",
    "goals.vacation",
    "goals.holidays",
    "investing.currentHoldings",
    "investing.riskTolerance",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

fn issue(kind: &'static str, detail: String) -> Issue {
    Issue { kind, detail }
}

pub fn find_issues(conn: &Connection) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    // 1) Expense rows the calculator will skip or zero out
    let mut stmt = conn.prepare("SELECT id, category, amount, date FROM expenses ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let category: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let date: String = r.get(3)?;
        if date.trim().is_empty() {
            issues.push(issue("expense_undated", format!("id {}", id)));
        } else if parse_expense_date(&date).is_none() {
            issues.push(issue("expense_bad_date", format!("id {}: '{}'", id, date)));
        }
        if let ExpenseCategory::Other(label) = ExpenseCategory::from(category) {
            issues.push(issue("expense_unknown_category", format!("id {}: '{}'", id, label)));
        }
        match amount.trim().parse::<Decimal>() {
            Ok(v) if v > Decimal::ZERO => {}
            Ok(_) => issues.push(issue("expense_non_positive", format!("id {}: {}", id, amount))),
            Err(_) => issues.push(issue("expense_bad_amount", format!("id {}: '{}'", id, amount))),
        }
    }

    // 2) Profile rows: unknown keys and numbers that read as 0
    let mut stmt2 = conn.prepare("SELECT key, value FROM profile_fields ORDER BY key")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let key: String = r.get(0)?;
        let value: String = r.get(1)?;
        let Ok(canonical) = Profile::canonical_key(&key) else {
            issues.push(issue("profile_unknown_field", key));
            continue;
        };
        let v = value.trim();
        if TEXT_FIELDS.contains(&canonical.as_str()) || v.is_empty() {
            continue;
        }
        if !v.parse::<f64>().is_ok_and(f64::is_finite) {
            issues.push(issue("profile_not_a_number", format!("{} = '{}'", canonical, value)));
        }
    }
    Ok(issues)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let issues = find_issues(conn)?;
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
