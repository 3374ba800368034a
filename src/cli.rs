// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn file_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).value_name("FILE").help(help)
}

fn mission_sources(cmd: Command) -> Command {
    cmd.arg(file_arg("raw", "Raw mission CSV (quoted dialect)"))
        .arg(file_arg("labeled", "Labeled mission CSV with mission_action_type"))
}

fn tx_sources(cmd: Command) -> Command {
    cmd.arg(file_arg("tx", "Transaction CSV"))
        .arg(file_arg("domains", "brand_code,domain mapping CSV"))
}

fn all_sources(cmd: Command) -> Command {
    tx_sources(mission_sources(cmd))
}

pub fn build_cli() -> Command {
    Command::new("pointfeed")
        .about("Rewards points, missions and spend analysis")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More log output (-v, -vv, -vvv)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Settings file (defaults to the platform config dir)"),
        )
        .subcommand(
            Command::new("missions")
                .about("Mission list and recommendations")
                .subcommand(json_flags(mission_sources(
                    Command::new("list").about("Missions from the bundled CSV files"),
                )))
                .subcommand(json_flags(mission_sources(
                    Command::new("normalize")
                        .about("Normalize a saved recommendation payload")
                        .arg(
                            Arg::new("payload")
                                .long("payload")
                                .value_name("FILE")
                                .required(true),
                        ),
                )))
                .subcommand(json_flags(mission_sources(
                    Command::new("recommend")
                        .about("Fetch recommendations, falling back to static missions")
                        .arg(Arg::new("user").long("user"))
                        .arg(Arg::new("k").long("k").value_parser(value_parser!(u32)))
                        .arg(
                            Arg::new("exclude_days")
                                .long("exclude-days")
                                .value_parser(value_parser!(u32)),
                        ),
                )))
                .subcommand(
                    Command::new("complete")
                        .about("Report a completed mission")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("user").long("user"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD")),
                ),
        )
        .subcommand(
            Command::new("points")
                .about("Point totals and spend analysis")
                .subcommand(json_flags(tx_sources(
                    Command::new("summary").about("Totals for the points card"),
                )))
                .subcommand(json_flags(tx_sources(
                    Command::new("history")
                        .about("Earn/use history, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )))
                .subcommand(json_flags(tx_sources(
                    Command::new("domains").about("Spend per domain in the spend window"),
                ))),
        )
        .subcommand(
            Command::new("export")
                .about("Export derived data")
                .subcommand(export_cmd("history", tx_sources))
                .subcommand(export_cmd("domains", tx_sources))
                .subcommand(export_cmd("missions", mission_sources)),
        )
        .subcommand(all_sources(
            Command::new("doctor").about("Check source files for problems"),
        ))
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(Command::new("show").about("Print effective settings"))
                .subcommand(Command::new("path").about("Print settings file path")),
        )
}

fn export_cmd(name: &'static str, sources: fn(Command) -> Command) -> Command {
    sources(
        Command::new(name)
            .arg(
                Arg::new("format")
                    .long("format")
                    .required(true)
                    .value_parser(["csv", "json"]),
            )
            .arg(Arg::new("out").long("out").value_name("PATH").required(true)),
    )
}
