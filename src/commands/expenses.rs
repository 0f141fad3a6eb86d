// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::totals::{same_month, sort_by_date};
use crate::models::{Expense, ExpenseCategory, NewExpense};
use crate::store;
use crate::utils::{
    fmt_money, get_currency_symbol, maybe_print_json, parse_month, pretty_table, required_arg,
};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let new = NewExpense::validate(
        required_arg(sub, "category")?,
        required_arg(sub, "amount")?,
        required_arg(sub, "date")?,
        sub.get_one::<String>("notes").map(String::as_str).unwrap_or(""),
    )?;
    let e = store::insert_expense(conn, new)?;
    let symbol = get_currency_symbol(conn)?;
    println!(
        "Recorded {} on {} for {} (id: {})",
        fmt_money(&symbol, e.amount_value()),
        e.date,
        e.category,
        e.id
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let raw = required_arg(sub, "id")?.trim();
    let id: i64 = raw
        .parse()
        .with_context(|| format!("Invalid expense id '{}'", raw))?;
    if !store::delete_expense(conn, id)? {
        bail!("Expense {} not found", id);
    }
    println!("Removed expense {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    fmt_money(&symbol, r.amount.parse().unwrap_or(0.0)),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Amount", "Notes"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub need: bool,
    pub amount: String,
    pub notes: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(e: &Expense) -> Self {
        ExpenseRow {
            id: e.id,
            date: e.date.clone(),
            category: e.category.label().to_string(),
            need: e.category.is_need(),
            amount: e.amount.to_string(),
            notes: e.notes.clone(),
        }
    }
}

/// Expenses oldest first (undated first), filtered by the list flags.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<ExpenseCategory>())
        .transpose()?;

    let mut expenses = store::list_expenses(conn)?;
    sort_by_date(&mut expenses);
    let mut rows: Vec<ExpenseRow> = expenses
        .iter()
        .filter(|e| {
            month.is_none_or(|m| e.parsed_date().is_some_and(|d| same_month(d, m)))
        })
        .filter(|e| category.as_ref().is_none_or(|c| &e.category == c))
        .map(ExpenseRow::from)
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
