// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for junit-csv-report

use thiserror::Error;

/// Errors that can occur while reading or parsing a single report file
#[derive(Debug, Error)]
pub enum ReportError {
    /// Syntax error reported by the XML reader
    #[error("XML parse error at byte {position}: {source}")]
    Xml {
        /// Byte offset at which the reader stopped
        position: usize,
        /// Underlying reader error
        #[source]
        source: quick_xml::Error,
    },

    /// Document is well-tokenized but not a well-formed element tree
    #[error("Malformed XML at byte {position}: {message}")]
    Malformed {
        /// Byte offset at which the problem was detected
        position: usize,
        /// Description of the problem
        message: String,
    },

    /// Error reading the report file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }
}
