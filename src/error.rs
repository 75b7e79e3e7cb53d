// src/error.rs
//! Configuration/build errors. Failures while scanning a document are not
//! errors in this sense; they come back as `records::Diagnostic` values so
//! partial results stay usable.

use thiserror::Error;

use crate::config::ColumnRole;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("column role {0:?} is mapped more than once")]
    DuplicateRole(ColumnRole),

    #[error("provider maps no columns")]
    NoColumns,

    #[error("unsupported time format {0:?} (expected e.g. \"hh:mm\")")]
    BadTimeFormat(String),

    #[error("unsupported date format {0:?} (expected e.g. \"dd.MM.yy\")")]
    BadDateFormat(String),
}
