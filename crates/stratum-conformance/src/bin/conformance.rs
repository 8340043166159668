//! CLI entrypoint for the Stratum conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use stratum_conformance::{FixtureSet, run_fixture_set};

/// Fixture-driven conformance runner for the Stratum runtime.
#[derive(Debug, Parser)]
#[command(name = "conformance")]
#[command(about = "Run Stratum runtime conformance fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute a fixture set and report results.
    Run {
        /// Fixture JSON file.
        fixtures: PathBuf,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Also compare against the host C library where possible.
        #[arg(long)]
        parity: bool,
        /// Only run cases whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the cases in a fixture set.
    List {
        /// Fixture JSON file.
        fixtures: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            fixtures,
            json,
            parity,
            filter,
        } => {
            let mut set = match FixtureSet::load(&fixtures) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Some(needle) = filter {
                set.filter(&needle);
            }

            let report = run_fixture_set(&set, parity);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(body) => println!("{body}"),
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", report.render_human());
            }

            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::List { fixtures } => match FixtureSet::load(&fixtures) {
            Ok(set) => {
                for case in &set.cases {
                    println!("{:<32} {}", case.name, case.function);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}
