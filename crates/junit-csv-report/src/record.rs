//! Flattened test case records

use std::fmt;

use serde::Serialize;

/// Result of a single test case, derived from its status child elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseResult {
    /// No status child present
    #[default]
    Passed,
    /// `<skipped>` child
    Skipped,
    /// `<failure>` child
    Failure,
    /// `<error>` child
    Error,
}

impl CaseResult {
    /// Map a status child tag to its result, if it is one
    #[must_use]
    pub fn from_status_tag(tag: &str) -> Option<Self> {
        match tag {
            "skipped" => Some(Self::Skipped),
            "failure" => Some(Self::Failure),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Label written to the CSV `TestCase: Result` column
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Skipped => "SKIPPED",
            Self::Failure => "FAILURE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields a test case contributes on its own, before suite fields are attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCaseFields {
    /// `classname` attribute
    pub class_name: String,
    /// `name` attribute
    pub name: String,
    /// `time` attribute, kept verbatim
    pub time: String,
    /// Result from the last status child
    pub result: CaseResult,
}

/// One output row: a test case with its enclosing suite's fields copied in
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestCaseRecord {
    /// Enclosing suite `name`
    #[serde(rename = "TestSuite: Name")]
    pub suite_name: String,
    /// Enclosing suite `timestamp`, kept verbatim
    #[serde(rename = "TestSuite: Timestamp")]
    pub timestamp: String,
    /// Test case `classname`
    #[serde(rename = "TestCase: ClassName")]
    pub class_name: String,
    /// Test case `name`
    #[serde(rename = "TestCase: Name")]
    pub name: String,
    /// Test case `time`, kept verbatim
    #[serde(rename = "TestCase: Time")]
    pub time: String,
    /// Test case result
    #[serde(rename = "TestCase: Result")]
    pub result: CaseResult,
}

impl TestCaseRecord {
    /// Column labels, in output order
    pub const HEADER: [&'static str; 6] = [
        "TestSuite: Name",
        "TestSuite: Timestamp",
        "TestCase: ClassName",
        "TestCase: Name",
        "TestCase: Time",
        "TestCase: Result",
    ];

    /// Build a record from suite-level fields and a test case's own fields
    #[must_use]
    pub fn new(suite_name: &str, timestamp: &str, case: TestCaseFields) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            timestamp: timestamp.to_string(),
            class_name: case.class_name,
            name: case.name,
            time: case.time,
            result: case.result,
        }
    }
}

/// Per-result tallies over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
    /// Records with [`CaseResult::Passed`]
    pub passed: usize,
    /// Records with [`CaseResult::Skipped`]
    pub skipped: usize,
    /// Records with [`CaseResult::Failure`]
    pub failure: usize,
    /// Records with [`CaseResult::Error`]
    pub error: usize,
}

impl ResultCounts {
    /// Count results across `records`
    #[must_use]
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a TestCaseRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.result {
                CaseResult::Passed => counts.passed += 1,
                CaseResult::Skipped => counts.skipped += 1,
                CaseResult::Failure => counts.failure += 1,
                CaseResult::Error => counts.error += 1,
            }
        }
        counts
    }

    /// Total number of records counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.skipped + self.failure + self.error
    }
}
