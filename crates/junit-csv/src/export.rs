//! CSV export of test case records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use junit_csv_report::TestCaseRecord;
use thiserror::Error;

/// Errors writing the CSV summary
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error creating or flushing the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding or writing a row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the header and one row per record to a new file at `path`
///
/// An existing file is truncated. The file is closed before returning.
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be created or written.
pub fn write_csv(path: &Path, records: &[TestCaseRecord]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_records(file, records)
}

/// Write the header and one row per record to `writer`
///
/// Rows use comma delimiters, CRLF line endings and quoting only where a
/// field needs it. The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns `ExportError` if writing or flushing fails.
pub fn write_records<W: Write>(writer: W, records: &[TestCaseRecord]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(TestCaseRecord::HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use junit_csv_report::CaseResult;
    use similar_asserts::assert_eq;

    fn render(records: &[TestCaseRecord]) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records).expect("Should write");
        String::from_utf8(out).expect("CSV should be UTF-8")
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            render(&[]),
            "TestSuite: Name,TestSuite: Timestamp,TestCase: ClassName,TestCase: Name,TestCase: Time,TestCase: Result\r\n"
        );
    }

    #[test]
    fn test_single_row() {
        let record = TestCaseRecord {
            suite_name: "Suite1".to_string(),
            timestamp: "2024-06-01T12:00:00".to_string(),
            class_name: "ClassA".to_string(),
            name: "testA".to_string(),
            time: "0.1".to_string(),
            result: CaseResult::Passed,
        };
        let csv = render(&[record]);
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Suite1,2024-06-01T12:00:00,ClassA,testA,0.1,PASSED");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let record = TestCaseRecord {
            suite_name: "a, b".to_string(),
            name: "say \"hi\"".to_string(),
            result: CaseResult::Error,
            ..Default::default()
        };
        let csv = render(&[record]);
        let row = csv.split("\r\n").nth(1).expect("data row");
        assert_eq!(row, "\"a, b\",,,\"say \"\"hi\"\"\",,ERROR");
    }

    #[test]
    fn test_result_labels_in_rows() {
        let records: Vec<TestCaseRecord> = [
            CaseResult::Passed,
            CaseResult::Skipped,
            CaseResult::Failure,
            CaseResult::Error,
        ]
        .into_iter()
        .map(|result| TestCaseRecord {
            result,
            ..Default::default()
        })
        .collect();

        let csv = render(&records);
        let results: Vec<&str> = csv
            .split("\r\n")
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| line.rsplit(',').next().unwrap_or_default())
            .collect();
        assert_eq!(results, vec!["PASSED", "SKIPPED", "FAILURE", "ERROR"]);
    }
}
