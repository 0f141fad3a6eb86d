// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Profile;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table, required_arg};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let key = store::set_profile_field(
                conn,
                required_arg(sub, "key")?,
                required_arg(sub, "value")?,
            )?;
            println!("Set {}", key);
        }
        Some(("unset", sub)) => {
            let key = store::unset_profile_field(conn, required_arg(sub, "key")?)?;
            println!("Cleared {}", key);
        }
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct FieldRow {
    pub key: String,
    pub value: String,
}

pub fn field_rows(profile: &Profile, section: Option<&str>) -> Vec<FieldRow> {
    profile
        .fields()
        .into_iter()
        .filter(|(k, _)| {
            section.is_none_or(|s| {
                k.split_once('.')
                    .is_some_and(|(sec, _)| sec.eq_ignore_ascii_case(s.trim()))
            })
        })
        .map(|(key, value)| FieldRow { key, value })
        .collect()
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let profile = store::load_profile(conn)?;
    let data = field_rows(&profile, sub.get_one::<String>("section").map(String::as_str));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.key, r.value])
            .collect();
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}
