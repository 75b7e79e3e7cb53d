// src/providers/sk_imhd.rs
//! Bratislava city transport dialect: dot times, no vehicle-type column;
//! the type is inferred from the line name instead.

use std::collections::HashMap;

use crate::config::{ColumnMapping, ColumnRole, ProviderConfig, RegionLocator};
use crate::vehicle::VehicleType;

/// Departure board: time, line, terminus. Night lines are prefixed "N"
/// and run as buses.
pub fn departures() -> ProviderConfig {
    ProviderConfig {
        name: s!("sk_imhd"),
        region: RegionLocator {
            anchor: s!(r#"<table class="tab"[^>]*>"#),
            close_tag: s!("table"),
        },
        row_tag: s!("tr"),
        cell_tags: vec![s!("td"), s!("th")],
        header_cell_tag: s!("th"),
        columns: vec![
            ColumnMapping { index: 0, role: ColumnRole::Time },
            ColumnMapping { index: 1, role: ColumnRole::TransportLine },
            ColumnMapping { index: 2, role: ColumnRole::Target },
        ],
        time_format: s!("hh.mm"),
        date_format: None,
        vehicle_types: HashMap::new(),
        line_prefix_types: vec![(s!("n"), VehicleType::Bus)],
        default_vehicle_type: Some(VehicleType::Tram),
        route: None,
        capitalize_target: false,
    }
}
