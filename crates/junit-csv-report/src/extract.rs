// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Flattening JUnit suites and cases into records
//!
//! Extraction works at three levels:
//! - [`extract_test_case`] turns one `<testcase>` into its own four fields
//! - [`extract_test_suite`] turns one `<testsuite>` into a record per direct `<testcase>`
//! - [`extract_report_file`] turns one report file into all of its records
//!
//! Problems with a report file never escape as errors. The file-level functions
//! return a [`FileOutcome`], and a skipped file simply contributes no records.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ReportError;
use crate::parser::{Element, parse_document, parse_document_bytes};
use crate::record::{CaseResult, TestCaseFields, TestCaseRecord};

const TESTSUITES: &str = "testsuites";
const TESTSUITE: &str = "testsuite";
const TESTCASE: &str = "testcase";

/// Why a report file contributed no records
#[derive(Debug)]
pub enum SkipReason {
    /// The file could not be read or is not well-formed XML
    Parse(ReportError),
    /// The root element is neither `testsuites` nor `testsuite`
    UnexpectedRoot {
        /// Tag of the root element
        tag: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "not valid JUnit XML: {e}"),
            Self::UnexpectedRoot { tag } => write!(f, "unexpected root tag '{tag}'"),
        }
    }
}

/// Result of extracting one report file
#[derive(Debug)]
pub enum FileOutcome {
    /// Records in document order (possibly none)
    Records(Vec<TestCaseRecord>),
    /// The file was skipped
    Skipped(SkipReason),
}

impl FileOutcome {
    /// Whether the file was skipped
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Records from the file; empty when it was skipped
    #[must_use]
    pub fn into_records(self) -> Vec<TestCaseRecord> {
        match self {
            Self::Records(records) => records,
            Self::Skipped(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<TestCaseRecord>, SkipReason>> for FileOutcome {
    fn from(result: Result<Vec<TestCaseRecord>, SkipReason>) -> Self {
        match result {
            Ok(records) => Self::Records(records),
            Err(reason) => Self::Skipped(reason),
        }
    }
}

/// Extract the intrinsic fields of a `<testcase>` element
///
/// The result is taken from the last `skipped`, `failure` or `error` child in
/// document order. No status child means [`CaseResult::Passed`].
#[must_use]
pub fn extract_test_case(testcase: &Element) -> TestCaseFields {
    let result = testcase
        .children()
        .iter()
        .fold(CaseResult::Passed, |result, child| {
            CaseResult::from_status_tag(child.tag()).unwrap_or(result)
        });

    TestCaseFields {
        class_name: testcase.attr_or_empty("classname").to_string(),
        name: testcase.attr_or_empty("name").to_string(),
        time: testcase.attr_or_empty("time").to_string(),
        result,
    }
}

/// Extract one record per direct `<testcase>` child of a `<testsuite>` element
#[must_use]
pub fn extract_test_suite(suite: &Element) -> Vec<TestCaseRecord> {
    let suite_name = suite.attr_or_empty("name");
    let timestamp = suite.attr_or_empty("timestamp");

    suite
        .children_named(TESTCASE)
        .map(|testcase| TestCaseRecord::new(suite_name, timestamp, extract_test_case(testcase)))
        .collect()
}

/// Extract all records from a parsed report document
///
/// # Errors
///
/// Returns `SkipReason::UnexpectedRoot` if the root is neither `testsuites`
/// nor `testsuite`.
pub fn extract_document(root: &Element) -> Result<Vec<TestCaseRecord>, SkipReason> {
    match root.tag() {
        TESTSUITES => Ok(root
            .children_named(TESTSUITE)
            .flat_map(extract_test_suite)
            .collect()),
        TESTSUITE => Ok(extract_test_suite(root)),
        other => Err(SkipReason::UnexpectedRoot {
            tag: other.to_string(),
        }),
    }
}

/// Parse and extract a report held in memory
#[must_use]
pub fn extract_report_str(xml: &str) -> FileOutcome {
    extract_xml(xml).into()
}

/// Read, parse and extract a report file
///
/// Skipped files are logged as warnings naming the file and the reason.
#[must_use]
pub fn extract_report_file(path: &Path) -> FileOutcome {
    let outcome: FileOutcome = read_report(path)
        .map_err(SkipReason::Parse)
        .and_then(|root| extract_document(&root))
        .into();

    match &outcome {
        FileOutcome::Records(records) => {
            debug!(path = %path.display(), records = records.len(), "Extracted report");
        }
        FileOutcome::Skipped(SkipReason::Parse(e)) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Skipping file - not valid JUnit XML"
            );
        }
        FileOutcome::Skipped(SkipReason::UnexpectedRoot { tag }) => {
            warn!(path = %path.display(), tag = %tag, "Unexpected root tag");
        }
    }

    outcome
}

fn extract_xml(xml: &str) -> Result<Vec<TestCaseRecord>, SkipReason> {
    let root = parse_document(xml).map_err(SkipReason::Parse)?;
    extract_document(&root)
}

fn read_report(path: &Path) -> Result<Element, ReportError> {
    let bytes = std::fs::read(path)?;
    parse_document_bytes(&bytes)
}
