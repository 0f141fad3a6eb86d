// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    CURRENCY_SYMBOL_KEY, DEFAULT_CURRENCY_SYMBOL, get_setting, required_arg, set_setting,
};
use anyhow::{Result, bail};
use rusqlite::Connection;

const KNOWN_KEYS: &[&str] = &[CURRENCY_SYMBOL_KEY];

fn check_key(key: &str) -> Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        bail!("Unknown setting '{}' (known: {})", key, KNOWN_KEYS.join(", "));
    }
    Ok(())
}

fn default_for(key: &str) -> Option<&'static str> {
    match key {
        CURRENCY_SYMBOL_KEY => Some(DEFAULT_CURRENCY_SYMBOL),
        _ => None,
    }
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = required_arg(sub, "key")?;
            check_key(key)?;
            let value = get_setting(conn, key)?
                .or_else(|| default_for(key).map(str::to_string))
                .unwrap_or_default();
            println!("{} = {}", key, value);
        }
        Some(("set", sub)) => {
            let key = required_arg(sub, "key")?;
            check_key(key)?;
            let value = required_arg(sub, "value")?.trim();
            if value.is_empty() {
                bail!("Setting '{}' cannot be empty", key);
            }
            set_setting(conn, key, value)?;
            println!("{} = {}", key, value);
        }
        _ => {}
    }
    Ok(())
}
