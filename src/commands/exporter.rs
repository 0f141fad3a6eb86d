// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::totals::sort_by_date;
use crate::commands::expenses::ExpenseRow;
use crate::store;
use crate::utils::required_arg;
use anyhow::{Result, bail};
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(conn, sub),
        _ => Ok(()),
    }
}

fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required_arg(sub, "format")?.to_lowercase();
    let out = required_arg(sub, "out")?;

    let mut expenses = store::list_expenses(conn)?;
    sort_by_date(&mut expenses);
    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "category", "need", "amount", "notes"])?;
            for r in &rows {
                wtr.write_record([
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.need.to_string(),
                    r.amount.clone(),
                    r.notes.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    info!(count = rows.len(), %out, "expenses exported");
    println!("Exported expenses to {}", out);
    Ok(())
}
