// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod providers;

pub mod engine;
pub mod error;
pub mod fields;
pub mod records;
pub mod route;
pub mod vehicle;

pub use config::{Capability, ColumnMapping, ColumnRole, ProviderConfig, RegionLocator, RouteRules};
pub use engine::Engine;
pub use error::EngineError;
pub use records::{Departure, Diagnostic, Extraction, Severity, StopSuggestion};
pub use route::RouteEntry;
pub use vehicle::VehicleType;
