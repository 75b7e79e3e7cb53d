// src/engine.rs
//! The record assembler: drives the tokenizer over one document and turns
//! raw rows into canonical records, collecting diagnostics along the way.
//!
//! One `Engine` per provider configuration. Extraction is synchronous and
//! holds no cross-call state; running the same document twice yields
//! identical output.

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::config::{Capability, ColumnRole, ProviderConfig};
use crate::core::clean::{breaks_to_newlines, capitalize_words, normalize_entities, strip_tags, to_lower};
use crate::core::tokenizer::{inner, inner_text, region, CellBlocks, TagBlocks};
use crate::error::EngineError;
use crate::fields::{combine, today, DateFormat, TimeFormat};
use crate::records::{Departure, Diagnostic, Extraction, StopSuggestion};
use crate::route::{Route, RouteSplitter};
use crate::vehicle::VehicleType;

pub struct Engine {
    cfg: ProviderConfig,
    anchor: Regex,
    time_format: TimeFormat,
    date_format: Option<DateFormat>,
    route_splitter: Option<RouteSplitter>,
}

impl Engine {
    /// Compiles the provider's patterns and validates the column mapping.
    pub fn new(cfg: ProviderConfig) -> Result<Self, EngineError> {
        if cfg.columns.is_empty() {
            return Err(EngineError::NoColumns);
        }
        for (i, a) in cfg.columns.iter().enumerate() {
            if cfg.columns[i + 1..].iter().any(|b| b.role == a.role) {
                return Err(EngineError::DuplicateRole(a.role));
            }
        }

        let anchor = RegexBuilder::new(&cfg.region.anchor)
            .case_insensitive(true)
            .build()
            .map_err(|source| EngineError::BadPattern {
                pattern: cfg.region.anchor.clone(),
                source,
            })?;

        let time_format = TimeFormat::new(&cfg.time_format)?;
        let date_format = cfg.date_format.as_deref().map(DateFormat::new).transpose()?;

        let route_splitter = match &cfg.route {
            Some(rules) => Some(
                RouteSplitter::new(&rules.delimiter, rules.boundary.as_deref()).map_err(
                    |source| EngineError::BadPattern {
                        pattern: rules.delimiter.clone(),
                        source,
                    },
                )?,
            ),
            None => None,
        };

        Ok(Self { cfg, anchor, time_format, date_format, route_splitter })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.cfg
    }

    /// Canonical fields this provider can populate.
    pub fn capabilities(&self) -> Vec<Capability> {
        self.cfg.capabilities()
    }

    /// The provider's date format, for callers that carry a date alongside
    /// the document (e.g. from the request that produced it).
    pub fn date_format(&self) -> Option<&DateFormat> {
        self.date_format.as_ref()
    }

    /// Extract departures, stamping times onto the current date.
    pub fn extract_departures(&self, document: &str) -> Extraction<Departure> {
        self.extract_departures_at(document, today())
    }

    /// Extract departures with an explicit base date.
    pub fn extract_departures_at(&self, document: &str, base: NaiveDate) -> Extraction<Departure> {
        let cfg = &self.cfg;
        let Some(time_idx) = cfg.column_for(ColumnRole::Time) else {
            return Extraction::aborted(Diagnostic::document("provider maps no time column", s!()));
        };
        let Some(target_idx) = cfg.column_for(ColumnRole::Target) else {
            return Extraction::aborted(Diagnostic::document("provider maps no target column", s!()));
        };

        let Some(table) = region(document, &self.anchor, &cfg.region.close_tag) else {
            warn!(provider = %cfg.name, "result region not found");
            return Extraction::aborted(Diagnostic::document(
                "result region not found",
                cfg.region.anchor.clone(),
            ));
        };

        let min = cfg.min_columns_for(ColumnRole::DEPARTURE);
        let mut out = Extraction::empty();
        let mut attempted = 0usize;

        for row in TagBlocks::new(table, &cfg.row_tag) {
            if self.is_header_row(row) {
                continue;
            }
            attempted += 1;

            let cells: Vec<&str> = CellBlocks::new(row, &cfg.cell_tags).collect();
            if cells.len() < min {
                out.diagnostics.push(Diagnostic::row(
                    format!("too few columns: {} of {min} required", cells.len()),
                    row,
                ));
                continue;
            }

            // Required: time.
            let time = match self.time_format.parse(&inner_text(cells[time_idx])) {
                Ok(t) => t,
                Err(e) => {
                    out.diagnostics
                        .push(Diagnostic::row(format!("column {time_idx}: {e}"), cells[time_idx]));
                    continue;
                }
            };

            // Required: target.
            let target = inner_text(cells[target_idx]);
            if target.is_empty() {
                out.diagnostics
                    .push(Diagnostic::row(format!("column {target_idx}: empty target"), cells[target_idx]));
                continue;
            }
            let target = if cfg.capitalize_target { capitalize_words(&target) } else { target };

            // Everything below degrades to a neutral value instead of
            // rejecting the row.
            let line = cfg
                .column_for(ColumnRole::TransportLine)
                .map(|i| inner_text(cells[i]))
                .unwrap_or_default();

            let vehicle_type = match cfg.column_for(ColumnRole::VehicleType) {
                Some(i) => VehicleType::from_token(&inner_text(cells[i]), &cfg.vehicle_types),
                None => self.vehicle_from_line(&line),
            };

            let platform = cfg
                .column_for(ColumnRole::Platform)
                .map(|i| inner_text(cells[i]))
                .unwrap_or_default();

            let route = match (cfg.column_for(ColumnRole::Route), &self.route_splitter) {
                (Some(i), Some(splitter)) => {
                    let block = strip_tags(&normalize_entities(&breaks_to_newlines(inner(cells[i]))));
                    if block.trim().is_empty() {
                        // Absent route cell: neutral value, row still accepted.
                        Route::default()
                    } else {
                        splitter.reconstruct(&block)
                    }
                }
                _ => Route::default(),
            };

            out.records.push(Departure {
                departure: combine(base, time),
                line,
                vehicle_type,
                platform,
                target,
                route: route.entries,
                exact_stops: route.exact_stops,
            });
        }

        self.finish(out, attempted)
    }

    /// Extract stop-name suggestions.
    pub fn extract_stop_suggestions(&self, document: &str) -> Extraction<StopSuggestion> {
        let cfg = &self.cfg;
        let Some(name_idx) = cfg.column_for(ColumnRole::StopName) else {
            return Extraction::aborted(Diagnostic::document(
                "provider maps no stop-name column",
                s!(),
            ));
        };

        let Some(table) = region(document, &self.anchor, &cfg.region.close_tag) else {
            warn!(provider = %cfg.name, "result region not found");
            return Extraction::aborted(Diagnostic::document(
                "result region not found",
                cfg.region.anchor.clone(),
            ));
        };

        let min = cfg.min_columns_for(ColumnRole::SUGGESTION);
        let mut out = Extraction::empty();
        let mut attempted = 0usize;

        for row in TagBlocks::new(table, &cfg.row_tag) {
            if self.is_header_row(row) {
                continue;
            }
            attempted += 1;

            let cells: Vec<&str> = CellBlocks::new(row, &cfg.cell_tags).collect();
            if cells.len() < min {
                out.diagnostics.push(Diagnostic::row(
                    format!("too few columns: {} of {min} required", cells.len()),
                    row,
                ));
                continue;
            }

            let name = inner_text(cells[name_idx]);
            if name.is_empty() {
                out.diagnostics
                    .push(Diagnostic::row(format!("column {name_idx}: empty stop name"), cells[name_idx]));
                continue;
            }

            let id = cfg
                .column_for(ColumnRole::StopId)
                .map(|i| inner_text(cells[i]))
                .unwrap_or_default();

            out.records.push(StopSuggestion { name, id });
        }

        self.finish(out, attempted)
    }

    /// Sink decision: the region existed and data rows were attempted, yet
    /// nothing came out. That distinguishes "nothing to show" from "our
    /// extraction rules are broken".
    fn finish<T>(&self, mut out: Extraction<T>, attempted: usize) -> Extraction<T> {
        if out.records.is_empty() && attempted > 0 {
            debug!(provider = %self.cfg.name, attempted, "pattern matched nothing");
            out.diagnostics.push(Diagnostic::document("pattern matched nothing", s!()));
        }
        out
    }

    /// A header row is one whose cells are all header cells. Rows mixing
    /// header and data cells count as data.
    fn is_header_row(&self, row: &str) -> bool {
        let lower = to_lower(row);
        if !lower.contains(&format!("<{}", to_lower(&self.cfg.header_cell_tag))) {
            return false;
        }
        !self
            .cfg
            .cell_tags
            .iter()
            .filter(|t| !t.eq_ignore_ascii_case(&self.cfg.header_cell_tag))
            .any(|t| lower.contains(&format!("<{}", to_lower(t))))
    }

    /// Vehicle type inferred from the transport-line name when no vehicle
    /// column is mapped (night lines and similar prefix conventions),
    /// falling back to the provider default.
    fn vehicle_from_line(&self, line: &str) -> VehicleType {
        let lower = line.trim().to_lowercase();
        for (prefix, vt) in &self.cfg.line_prefix_types {
            if !prefix.is_empty() && lower.starts_with(&prefix.to_lowercase()) {
                return vt.clone();
            }
        }
        match &self.cfg.default_vehicle_type {
            Some(vt) => vt.clone(),
            None => VehicleType::Unmapped(lower),
        }
    }
}
