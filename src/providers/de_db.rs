// src/providers/de_db.rs
//! German national rail dialect: colon times, explicit vehicle-type
//! column, route blocks with an estimation boundary.

use std::collections::HashMap;

use crate::config::{ColumnMapping, ColumnRole, ProviderConfig, RegionLocator, RouteRules};
use crate::vehicle::VehicleType;

fn vehicle_types() -> HashMap<String, VehicleType> {
    HashMap::from([
        (s!("ice"), VehicleType::HighSpeedTrain),
        (s!("ic"), VehicleType::IntercityTrain),
        (s!("ec"), VehicleType::IntercityTrain),
        (s!("ir"), VehicleType::InterRegionalTrain),
        (s!("re"), VehicleType::RegionalExpressTrain),
        (s!("rb"), VehicleType::RegionalTrain),
        (s!("sbahn"), VehicleType::InterurbanTrain),
        (s!("s"), VehicleType::InterurbanTrain),
        (s!("u"), VehicleType::Subway),
        (s!("str"), VehicleType::Tram),
        (s!("bus"), VehicleType::Bus),
        (s!("fähre"), VehicleType::Ferry),
    ])
}

/// Departure board: time, type, line, target (with folded route block),
/// platform.
pub fn departures() -> ProviderConfig {
    ProviderConfig {
        name: s!("de_db"),
        region: RegionLocator {
            anchor: s!(r#"<table[^>]*class="result[^>]*>"#),
            close_tag: s!("table"),
        },
        row_tag: s!("tr"),
        cell_tags: vec![s!("td"), s!("th")],
        header_cell_tag: s!("th"),
        columns: vec![
            ColumnMapping { index: 0, role: ColumnRole::Time },
            ColumnMapping { index: 1, role: ColumnRole::VehicleType },
            ColumnMapping { index: 2, role: ColumnRole::TransportLine },
            ColumnMapping { index: 3, role: ColumnRole::Target },
            ColumnMapping { index: 4, role: ColumnRole::Route },
            ColumnMapping { index: 5, role: ColumnRole::Platform },
        ],
        time_format: s!("hh:mm"),
        date_format: Some(s!("dd.MM.yy")),
        vehicle_types: vehicle_types(),
        line_prefix_types: Vec::new(),
        default_vehicle_type: None,
        route: Some(RouteRules {
            // Plain separator between stop segments; the boundary marker
            // ends the confirmed part of the route.
            delimiter: s!(r"\n-\n"),
            boundary: Some(s!(r"\n--\n")),
        }),
        capitalize_target: true,
    }
}

/// Stop-name suggestion list (the "did you mean" table).
pub fn stop_suggestions() -> ProviderConfig {
    ProviderConfig {
        name: s!("de_db_stops"),
        region: RegionLocator {
            anchor: s!(r#"<table[^>]*class="stoplist[^>]*>"#),
            close_tag: s!("table"),
        },
        row_tag: s!("tr"),
        cell_tags: vec![s!("td")],
        header_cell_tag: s!("th"),
        columns: vec![
            ColumnMapping { index: 0, role: ColumnRole::StopName },
            ColumnMapping { index: 1, role: ColumnRole::StopId },
        ],
        time_format: s!("hh:mm"),
        date_format: None,
        vehicle_types: HashMap::new(),
        line_prefix_types: Vec::new(),
        default_vehicle_type: None,
        route: None,
        capitalize_target: false,
    }
}
