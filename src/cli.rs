// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn as_of_arg() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .value_name("YYYY-MM-DD")
        .help("Evaluate as if today were this date (selects the current month)")
}

fn rate_years_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("rate")
            .long("rate")
            .default_value("0")
            .help("Expected annual return in percent"),
    )
    .arg(
        Arg::new("years")
            .long("years")
            .required(true)
            .help("Horizon in years"),
    )
}

pub fn build_cli() -> Command {
    Command::new("nestegg")
        .version(crate_version!())
        .about("Personal budgeting: expenses, net worth, 50/30/20 check, goals and advice")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More diagnostics on stderr (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Record, list and delete expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category label or slug (see `category list`)"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("notes").long("notes").default_value("")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, oldest first")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete an expense by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .help("Expense id as shown by `expense list`"),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Expense categories")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Show every category and whether it counts as a need"),
                )),
        )
        .subcommand(
            Command::new("profile")
                .about("Debts, assets, goals, income and investing fields")
                .subcommand(
                    Command::new("set")
                        .about("Set a field, e.g. `profile set income.monthlyNet 5200`")
                        .arg(Arg::new("key").required(true).value_name("SECTION.FIELD"))
                        .arg(Arg::new("value").required(true).allow_hyphen_values(true)),
                )
                .subcommand(
                    Command::new("unset")
                        .about("Clear a field")
                        .arg(Arg::new("key").required(true).value_name("SECTION.FIELD")),
                )
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show every field")
                        .arg(Arg::new("section").long("section")),
                )),
        )
        .subcommand(
            Command::new("summary")
                .about("Totals, net worth, 50/30/20 status, projections and recommendations")
                .arg(as_of_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the whole summary as JSON"),
                ),
        )
        .subcommand(json_flags(
            Command::new("advise")
                .about("Only the recommendations")
                .arg(as_of_arg()),
        ))
        .subcommand(
            Command::new("project")
                .about("One-off compound-interest projections")
                .subcommand(rate_years_args(
                    Command::new("required")
                        .about("Monthly contribution needed to reach a goal")
                        .arg(Arg::new("amount").long("amount").required(true)),
                ))
                .subcommand(rate_years_args(
                    Command::new("future")
                        .about("Value reached by a monthly contribution")
                        .arg(Arg::new("monthly").long("monthly").required(true)),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("expenses")
                    .about("Write every expense to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
