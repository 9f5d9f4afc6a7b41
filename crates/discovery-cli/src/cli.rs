//! Command-line definition

use crate::config::LogFormat;
use clap::{value_parser, Arg, ArgAction, Command};
use discovery_model::IdeaStatus;
use discovery_scoring::SortKey;
use std::path::PathBuf;
use std::str::FromStr;

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .long("snapshot")
        .short('s')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON snapshot of ideas and hypotheses")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn score_input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help(help)
}

/// Build the `discovery` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("discovery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("RICE scoring, priority matrix and validation progress for product ideas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(LogFormat::from_str)
                .help("Log output format: text or json"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity (repeatable)"),
        )
        .subcommand(
            Command::new("score")
                .about("Compute a RICE score; unset inputs fall back to configured defaults")
                .arg(score_input_arg("reach", "Users reached per period"))
                .arg(score_input_arg("impact", "Impact, 1-5"))
                .arg(score_input_arg("confidence", "Confidence percentage, 0-100"))
                .arg(score_input_arg("effort", "Effort, 1-5"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("matrix")
                .about("Place scored ideas in the impact/effort matrix")
                .arg(snapshot_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("progress")
                .about("Per-idea and overall validation progress")
                .arg(snapshot_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("rank")
                .about("List ideas by score")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .default_value("rice")
                        .value_parser(SortKey::from_str)
                        .help("Sort key: rice, impact, effort or title"),
                )
                .arg(
                    Arg::new("asc")
                        .long("asc")
                        .action(ArgAction::SetTrue)
                        .help("Smallest first"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_parser(IdeaStatus::from_str)
                        .help("Keep only ideas with this status, e.g. \"In Discovery\""),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Dashboard counters")
                .arg(snapshot_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("reconcile")
                .about("List ideas whose stored RICE score is stale")
                .arg(snapshot_arg())
                .arg(json_arg()),
        )
}
