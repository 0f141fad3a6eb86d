// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseCategory;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct CategoryRow {
    label: String,
    slug: String,
    need: bool,
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let data: Vec<CategoryRow> = ExpenseCategory::ALL
            .iter()
            .map(|c| CategoryRow {
                label: c.label().to_string(),
                slug: c.slug(),
                need: c.is_need(),
            })
            .collect();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
            let rows = data
                .into_iter()
                .map(|r| {
                    let bucket = if r.need { "need" } else { "want" };
                    vec![r.label, r.slug, bucket.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Slug", "Bucket"], rows));
        }
    }
    Ok(())
}
