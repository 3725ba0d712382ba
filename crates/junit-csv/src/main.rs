//! junit-csv: flatten JUnit XML test reports into one CSV summary
//!
//! Searches a directory tree for `*.xml` reports and writes one CSV row per
//! test case found.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};

use junit_csv::config::Config;
use junit_csv::run::{self, EXIT_USAGE};

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run::run(&config.xml_dir, &config.output_csv) {
        Ok(summary) => {
            info!(
                files_skipped = summary.files_skipped,
                passed = summary.counts.passed,
                skipped = summary.counts.skipped,
                failure = summary.counts.failure,
                error = summary.counts.error,
                "Wrote {} row(s) to {}",
                summary.rows(),
                config.output_csv.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
