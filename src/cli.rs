// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

pub fn build_cli() -> Command {
    Command::new("perdiem")
        .version(crate_version!())
        .about("Daily spending allowance calculator with savings goals and carryover")
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("budget")
                .about("Edit or inspect the raw budget inputs")
                .subcommand(
                    Command::new("set")
                        .about("Set the total amount and/or the date range")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .help("Total amount of money for the range"),
                        )
                        .arg(
                            Arg::new("start")
                                .long("start")
                                .value_name("YYYY-MM-DD")
                                .help("First day of the range"),
                        )
                        .arg(
                            Arg::new("end")
                                .long("end")
                                .value_name("YYYY-MM-DD")
                                .help("Last day of the range"),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the current inputs")
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .default_value(""),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("CATEGORY")
                                .default_value("general"),
                        ),
                )
                .subcommand(
                    Command::new("set")
                        .about("Update a savings goal by id")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("amount").long("amount").value_name("AMOUNT"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("CATEGORY"),
                        ),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a savings goal by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List savings goals")
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("spend")
                .about("Log, clear, or list daily expenses")
                .subcommand(
                    Command::new("set")
                        .about("Record the amount spent on a day")
                        .arg(Arg::new("date").required(true).value_name("YYYY-MM-DD"))
                        .arg(Arg::new("amount").required(true).value_name("AMOUNT")),
                )
                .subcommand(
                    Command::new("clear")
                        .about("Remove the entry for a day")
                        .arg(Arg::new("date").required(true).value_name("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List logged expenses")
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("ledger")
                .about("Compute and show the day-by-day allowance ledger")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("export")
                .about("Export the computed ledger")
                .subcommand(
                    Command::new("csv")
                        .about("Write the ledger as CSV")
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .value_name("FILE")
                                .help("Output path (default embeds the date range)"),
                        ),
                )
                .subcommand(
                    Command::new("text")
                        .about("Write the ledger as clipboard-ready text")
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .value_name("FILE")
                                .help("Output path (default prints to stdout)"),
                        ),
                ),
        )
        .subcommand(Command::new("reset").about("Restore the default inputs"))
}
