// src/providers/mod.rs
//! # Provider configurations
//!
//! Each submodule builds the `ProviderConfig` for one back end's markup
//! dialect. A provider module knows *where the result table lives* and
//! *what each column means* for that back end; it contains no parsing
//! logic of its own. The engine consumes these as plain data, so adding a
//! back end means adding a configuration here (or shipping one as JSON),
//! not touching the engine.
//!
//! Conventions:
//! - Anchors match the opening tag of the result table, case-insensitively,
//!   and stay tolerant of attribute noise (`[^>]*`).
//! - Vehicle vocabularies are keyed by lowercased provider tokens.
//! - Configs should be testable offline against captured fixtures.

pub mod de_db;
pub mod sk_imhd;
