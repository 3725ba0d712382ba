//! Configuration for junit-csv
//!
//! Command-line arguments and the logging level derived from them.

use std::path::PathBuf;

use clap::Parser;

/// Flatten JUnit XML test reports into a single CSV summary
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "junit-csv")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory searched recursively for `*.xml` report files
    pub xml_dir: PathBuf,

    /// CSV file to write (created or truncated)
    pub output_csv: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs each report file as it is extracted, with its record count.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings (such as skipped report files) will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
