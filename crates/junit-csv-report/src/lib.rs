// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junit-csv-report: JUnit XML report parsing for junit-csv
//!
//! This library crate parses JUnit-style XML test reports into an element tree
//! and flattens their test suites and test cases into [`TestCaseRecord`] rows.
//! Malformed or unexpected reports are reported as a [`FileOutcome::Skipped`]
//! value instead of an error, so a caller aggregating many files can keep going.
//!
//! # Example
//!
//! ```
//! use junit_csv_report::{CaseResult, extract_report_str};
//!
//! let xml = r#"<testsuite name="Suite1" timestamp="2024-06-01T12:00:00">
//!     <testcase classname="ClassA" name="testA" time="0.1"/>
//! </testsuite>"#;
//!
//! let records = extract_report_str(xml).into_records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].result, CaseResult::Passed);
//! ```

pub mod error;
pub mod extract;
pub mod parser;
pub mod record;

pub use error::ReportError;
pub use extract::{
    FileOutcome, SkipReason, extract_document, extract_report_file, extract_report_str,
    extract_test_case, extract_test_suite,
};
pub use parser::{Element, decode_document, parse_document, parse_document_bytes};
pub use record::{CaseResult, ResultCounts, TestCaseFields, TestCaseRecord};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::extract::{FileOutcome, extract_report_file};
    pub use crate::record::{CaseResult, TestCaseRecord};
}
