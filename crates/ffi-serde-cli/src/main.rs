//! `ffi-serde` command-line tool.

use anyhow::{Context, Result};
use clap::Parser;

use ffi_serde_cli::logging::init_logging;
use ffi_serde_cli::{run_annotate, run_classify, run_generate};
use ffi_serde_model::EligibilityRules;

mod cli;
mod summary;

use crate::cli::{ClassifyArgs, Cli, Command};
use crate::summary::{print_classification, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let rules = EligibilityRules::default();
    let exit_code = match cli.command {
        Command::Annotate(args) => match run_annotate(&args.driver_options(), &rules.declarative) {
            Ok(summary) => {
                print_summary(&summary);
                i32::from(summary.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Generate(args) => match run_generate(
            &args.input.driver_options(),
            &rules.manual,
            &args.generate_options(),
        ) {
            Ok(summary) => {
                print_summary(&summary);
                i32::from(summary.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Classify(args) => match classify(&args, &rules) {
            Ok(has_errors) => i32::from(has_errors),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Runs `classify` and prints the result; returns whether any file failed.
fn classify(args: &ClassifyArgs, rules: &EligibilityRules) -> Result<bool> {
    let report = run_classify(&args.input.driver_options(), rules)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize classification")?;
        println!("{json}");
    } else {
        print_classification(&report);
    }
    Ok(report.has_errors())
}
