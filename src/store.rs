// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Loading and saving the profile bundle and the expense list.

use crate::models::{Expense, ExpenseCategory, NewExpense, Profile};
use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Expenses in insertion (id) order.
pub fn list_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt =
        conn.prepare("SELECT id, category, amount, date, notes FROM expenses ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, category, amount_s, date, notes) = row.context("Read expense row")?;
        let amount = amount_s.trim().parse::<Decimal>().unwrap_or_else(|_| {
            warn!(id, amount = %amount_s, "unparseable expense amount, counting as 0");
            Decimal::ZERO
        });
        out.push(Expense {
            id,
            category: ExpenseCategory::from(category),
            amount,
            date,
            notes,
        });
    }
    Ok(out)
}

/// Creation-time id in epoch millis, kept strictly increasing.
fn next_expense_id(conn: &Connection) -> Result<i64> {
    let now = chrono::Utc::now().timestamp_millis();
    let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM expenses", [], |r| r.get(0))?;
    Ok(max.map_or(now, |m| now.max(m + 1)))
}

pub fn insert_expense(conn: &Connection, new: NewExpense) -> Result<Expense> {
    let id = next_expense_id(conn)?;
    let expense = new.with_id(id);
    conn.execute(
        "INSERT INTO expenses(id, category, amount, date, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            expense.id,
            expense.category.label(),
            expense.amount.to_string(),
            expense.date,
            expense.notes
        ],
    )
    .context("Insert expense")?;
    debug!(id, category = %expense.category, "expense recorded");
    Ok(expense)
}

/// Returns whether a row was removed.
pub fn delete_expense(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM expenses WHERE id=?1", params![id])
        .with_context(|| format!("Delete expense {}", id))?;
    Ok(n > 0)
}

/// Stored profile fields plus every expense. Rows with keys or values the
/// current model no longer accepts are skipped with a warning.
pub fn load_profile(conn: &Connection) -> Result<Profile> {
    let mut profile = Profile::default();
    let mut stmt = conn.prepare("SELECT key, value FROM profile_fields ORDER BY key")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
    for row in rows {
        let (key, value) = row.context("Read profile row")?;
        if let Err(e) = profile.set(&key, &value) {
            warn!(%key, error = %e, "ignoring stored profile field");
        }
    }
    profile.expenses = list_expenses(conn)?;
    debug!(expenses = profile.expenses.len(), "profile loaded");
    Ok(profile)
}

/// Validates and upserts one field; returns its canonical key.
pub fn set_profile_field(conn: &Connection, key: &str, value: &str) -> Result<String> {
    let mut scratch = Profile::default();
    let canonical = scratch.set(key, value)?;
    let stored = scratch.get(&canonical)?;
    conn.execute(
        "INSERT INTO profile_fields(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
        params![canonical, stored],
    )
    .with_context(|| format!("Save profile field {}", canonical))?;
    debug!(key = %canonical, "profile field saved");
    Ok(canonical)
}

pub fn unset_profile_field(conn: &Connection, key: &str) -> Result<String> {
    let canonical = Profile::canonical_key(key)?;
    conn.execute(
        "DELETE FROM profile_fields WHERE key=?1",
        params![canonical],
    )
    .with_context(|| format!("Clear profile field {}", canonical))?;
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::RiskTolerance;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn expense_ids_increase_even_within_one_millisecond() {
        let conn = conn();
        let a = insert_expense(
            &conn,
            NewExpense::validate("Rent", "1000", "2025-01-01", "").unwrap(),
        )
        .unwrap();
        let b = insert_expense(
            &conn,
            NewExpense::validate("Rent", "1000", "2025-01-01", "").unwrap(),
        )
        .unwrap();
        assert!(b.id > a.id);
        assert_eq!(list_expenses(&conn).unwrap().len(), 2);
        assert!(delete_expense(&conn, a.id).unwrap());
        assert!(!delete_expense(&conn, a.id).unwrap());
    }

    #[test]
    fn bad_stored_rows_degrade_instead_of_failing() {
        let conn = conn();
        conn.execute_batch(
            "INSERT INTO expenses(id, category, amount, date, notes) VALUES (1, 'Pets', 'n/a', 'someday', '');
             INSERT INTO profile_fields(key, value) VALUES ('income.bonus', '1');
             INSERT INTO profile_fields(key, value) VALUES ('investing.riskTolerance', 'wild');
             INSERT INTO profile_fields(key, value) VALUES ('income.monthlyNet', '4200');",
        )
        .unwrap();
        let p = load_profile(&conn).unwrap();
        assert_eq!(p.expenses[0].amount, Decimal::ZERO);
        assert_eq!(p.expenses[0].category, ExpenseCategory::Other("Pets".into()));
        assert_eq!(p.income.monthly_net, "4200");
        assert_eq!(p.investing.risk_tolerance, None);
    }

    #[test]
    fn profile_fields_store_canonical_keys() {
        let conn = conn();
        assert_eq!(
            set_profile_field(&conn, "investing.risktolerance", "aggressive").unwrap(),
            "investing.riskTolerance"
        );
        let stored: String = conn
            .query_row(
                "SELECT value FROM profile_fields WHERE key='investing.riskTolerance'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(stored, "Aggressive");
        let p = load_profile(&conn).unwrap();
        assert_eq!(p.investing.risk_tolerance, Some(RiskTolerance::Aggressive));

        unset_profile_field(&conn, "investing.riskTolerance").unwrap();
        assert_eq!(load_profile(&conn).unwrap().investing.risk_tolerance, None);
        assert!(set_profile_field(&conn, "debts.yacht", "1").is_err());
    }
}
