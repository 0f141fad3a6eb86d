// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::projection::{future_value, required_monthly};
use crate::utils::{fmt_money, get_currency_symbol, parse_f64, required_arg};
use anyhow::Result;
use rusqlite::Connection;

struct Horizon {
    rate: f64,
    years: f64,
}

fn horizon(sub: &clap::ArgMatches) -> Result<Horizon> {
    Ok(Horizon {
        rate: parse_f64(required_arg(sub, "rate")?)?,
        years: parse_f64(required_arg(sub, "years")?)?,
    })
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let symbol = get_currency_symbol(conn)?;
    match m.subcommand() {
        Some(("required", sub)) => {
            let amount = parse_f64(required_arg(sub, "amount")?)?;
            let h = horizon(sub)?;
            let monthly = required_monthly(amount, h.rate, h.years);
            println!(
                "Save {} per month to reach {} in {} years at {}%",
                fmt_money(&symbol, monthly),
                fmt_money(&symbol, amount),
                h.years,
                h.rate
            );
        }
        Some(("future", sub)) => {
            let monthly = parse_f64(required_arg(sub, "monthly")?)?;
            let h = horizon(sub)?;
            let value = future_value(monthly, h.rate, h.years);
            println!(
                "{} per month grows to {} in {} years at {}%",
                fmt_money(&symbol, monthly),
                fmt_money(&symbol, value),
                h.years,
                h.rate
            );
        }
        _ => {}
    }
    Ok(())
}
