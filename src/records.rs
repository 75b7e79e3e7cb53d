// src/records.rs
//! Canonical output records, diagnostics, and the extraction result.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::route::RouteEntry;
use crate::vehicle::VehicleType;

/// One departure row, normalized. The timestamp is always valid when the
/// record was accepted; every other field defaults to an empty/neutral
/// value when the source row lacks it, never to an absent field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    pub departure: NaiveDateTime,
    pub line: String,
    pub vehicle_type: VehicleType,
    pub platform: String,
    pub target: String,
    pub route: Vec<RouteEntry>,
    /// Leading route entries with confirmed times.
    pub exact_stops: usize,
}

/// One stop-name suggestion. `id` is empty when the provider has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopSuggestion {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Row skipped, extraction continued.
    Row,
    /// Whole extraction aborted (or produced nothing).
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// The offending source fragment, for operability.
    pub fragment: String,
}

impl Diagnostic {
    pub(crate) fn row(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { severity: Severity::Row, message: message.into(), fragment: fragment.into() }
    }

    pub(crate) fn document(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { severity: Severity::Document, message: message.into(), fragment: fragment.into() }
    }
}

/// The result sink: accepted records in document (i.e. schedule) order,
/// plus everything that went wrong. Partial success is normal operation;
/// `records` stays usable with `diagnostics` non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Extraction<T> {
    pub(crate) fn empty() -> Self {
        Self { records: Vec::new(), diagnostics: Vec::new() }
    }

    pub(crate) fn aborted(diagnostic: Diagnostic) -> Self {
        Self { records: Vec::new(), diagnostics: vec![diagnostic] }
    }

    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }
}
