// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Run orchestration
//!
//! A run discovers report files, extracts records from each in discovery
//! order, and writes them all to one CSV file.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use junit_csv::run::run;
//!
//! let summary = run(Path::new("target/test-reports"), Path::new("results.csv"))
//!     .expect("write csv");
//! println!("Wrote {} rows", summary.rows());
//! ```

use std::path::{Path, PathBuf};

use junit_csv_report::{FileOutcome, ResultCounts, TestCaseRecord, extract_report_file};
use thiserror::Error;
use tracing::info;

use crate::discover::discover_xml_files;
use crate::export::{ExportError, write_csv};

/// Exit status for invalid command-line usage
pub const EXIT_USAGE: u8 = 1;

/// Exit status when the CSV summary cannot be written
pub const EXIT_OUTPUT: u8 = 2;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The destination CSV could not be created or written
    #[error("Could not open or write to CSV file '{}': {source}", .path.display())]
    Output {
        /// Destination path
        path: PathBuf,
        /// Underlying export error
        #[source]
        source: ExportError,
    },
}

impl RunError {
    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Output { .. } => EXIT_OUTPUT,
        }
    }
}

/// Statistics from a completed run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of `*.xml` files discovered
    pub files_found: usize,
    /// Files that were skipped as malformed or unexpected
    pub files_skipped: usize,
    /// Per-result tallies of the rows written
    pub counts: ResultCounts,
}

impl RunSummary {
    /// Number of data rows written
    #[must_use]
    pub fn rows(&self) -> usize {
        self.counts.total()
    }
}

/// Extract records from every report under `xml_dir`, in discovery order
///
/// Returns the records together with the number of files found and skipped.
#[must_use]
pub fn collect_records(xml_dir: &Path) -> (Vec<TestCaseRecord>, RunSummary) {
    let files = discover_xml_files(xml_dir);
    info!(dir = %xml_dir.display(), "Found {} XML file(s).", files.len());

    let mut records = Vec::new();
    let mut summary = RunSummary {
        files_found: files.len(),
        ..Default::default()
    };

    for file in &files {
        match extract_report_file(file) {
            FileOutcome::Records(mut found) => records.append(&mut found),
            FileOutcome::Skipped(_) => summary.files_skipped += 1,
        }
    }

    summary.counts = ResultCounts::tally(&records);
    (records, summary)
}

/// Convert every report under `xml_dir` into one CSV file at `csv_path`
///
/// Report files that cannot be parsed are skipped with a warning and do not
/// fail the run.
///
/// # Errors
///
/// Returns `RunError::Output` if the CSV file cannot be created or written.
pub fn run(xml_dir: &Path, csv_path: &Path) -> Result<RunSummary, RunError> {
    let (records, summary) = collect_records(xml_dir);

    write_csv(csv_path, &records).map_err(|source| RunError::Output {
        path: csv_path.to_path_buf(),
        source,
    })?;

    Ok(summary)
}
