// src/config.rs
//! Provider configuration: one engine, many table dialects.
//!
//! Everything a back end does differently is declared here as data: where
//! the result table lives, which tag delimits rows and cells, what each
//! column means, how times and dates are written, which vehicle tokens map
//! to which canonical type, and how route blocks are delimited. Provider
//! differences are configuration, never code branches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleType;

/// Semantic meaning of a physical table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnRole {
    Time,
    VehicleType,
    TransportLine,
    Target,
    Route,
    Platform,
    StopName,
    StopId,
}

impl ColumnRole {
    /// Roles a departure record reads.
    pub(crate) const DEPARTURE: &'static [ColumnRole] = &[
        ColumnRole::Time,
        ColumnRole::VehicleType,
        ColumnRole::TransportLine,
        ColumnRole::Target,
        ColumnRole::Route,
        ColumnRole::Platform,
    ];

    /// Roles a stop suggestion record reads.
    pub(crate) const SUGGESTION: &'static [ColumnRole] =
        &[ColumnRole::StopName, ColumnRole::StopId];
}

/// Canonical fields a provider configuration is able to populate. Callers
/// can adapt their expectations from this without attempting extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    TransportLine,
    TypeOfVehicle,
    Platform,
    RouteStops,
    RouteTimes,
    StopId,
    StopSuggestions,
}

/// How to find the bounded table region inside the full document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionLocator {
    /// Regex marking the start of the region, matched case-insensitively.
    pub anchor: String,
    /// Tag whose next closing occurrence ends the region, e.g. "table".
    pub close_tag: String,
}

/// Route-cell reconstruction rules. Both fields are regex patterns over
/// the tag-stripped route block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRules {
    /// Separator between consecutive stop segments.
    pub delimiter: String,
    /// Marker after which listed stops are estimates, not confirmed.
    #[serde(default)]
    pub boundary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub index: usize,
    pub role: ColumnRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub region: RegionLocator,
    /// Row tag, usually "tr".
    #[serde(default = "default_row_tag")]
    pub row_tag: String,
    /// Cell tag alternation, usually td/th.
    #[serde(default = "default_cell_tags")]
    pub cell_tags: Vec<String>,
    /// Rows whose cells are all this tag are header rows, skipped silently.
    #[serde(default = "default_header_tag")]
    pub header_cell_tag: String,
    /// Physical column index to role. Sparse and unordered is fine; each
    /// role at most once.
    pub columns: Vec<ColumnMapping>,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default)]
    pub date_format: Option<String>,
    /// Provider token (lowercased) to canonical vehicle type.
    #[serde(default)]
    pub vehicle_types: HashMap<String, VehicleType>,
    /// Transport-line prefix to vehicle type, consulted when no vehicle
    /// column is mapped (e.g. "N" night lines run as buses).
    #[serde(default)]
    pub line_prefix_types: Vec<(String, VehicleType)>,
    /// Assumed vehicle type when neither a vehicle column nor a prefix
    /// rule decides.
    #[serde(default)]
    pub default_vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub route: Option<RouteRules>,
    /// Capitalize each word of the target name.
    #[serde(default)]
    pub capitalize_target: bool,
}

fn default_row_tag() -> String { s!("tr") }
fn default_cell_tags() -> Vec<String> { vec![s!("td"), s!("th")] }
fn default_header_tag() -> String { s!("th") }
fn default_time_format() -> String { s!("hh:mm") }

impl ProviderConfig {
    /// Index of the column carrying `role`, if mapped.
    pub fn column_for(&self, role: ColumnRole) -> Option<usize> {
        self.columns.iter().find(|c| c.role == role).map(|c| c.index)
    }

    /// Minimum cell count a data row needs for the given record roles.
    pub(crate) fn min_columns_for(&self, roles: &[ColumnRole]) -> usize {
        self.columns
            .iter()
            .filter(|c| roles.contains(&c.role))
            .map(|c| c.index + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        let mut caps = Vec::new();
        if self.column_for(ColumnRole::TransportLine).is_some() {
            caps.push(Capability::TransportLine);
        }
        if self.column_for(ColumnRole::VehicleType).is_some()
            || !self.line_prefix_types.is_empty()
            || self.default_vehicle_type.is_some()
        {
            caps.push(Capability::TypeOfVehicle);
        }
        if self.column_for(ColumnRole::Platform).is_some() {
            caps.push(Capability::Platform);
        }
        if self.column_for(ColumnRole::Route).is_some() && self.route.is_some() {
            caps.push(Capability::RouteStops);
            caps.push(Capability::RouteTimes);
        }
        if self.column_for(ColumnRole::StopId).is_some() {
            caps.push(Capability::StopId);
        }
        if self.column_for(ColumnRole::StopName).is_some() {
            caps.push(Capability::StopSuggestions);
        }
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(columns: Vec<ColumnMapping>) -> ProviderConfig {
        ProviderConfig {
            name: s!("test"),
            region: RegionLocator { anchor: s!("<table>"), close_tag: s!("table") },
            row_tag: default_row_tag(),
            cell_tags: default_cell_tags(),
            header_cell_tag: default_header_tag(),
            columns,
            time_format: default_time_format(),
            date_format: None,
            vehicle_types: HashMap::new(),
            line_prefix_types: Vec::new(),
            default_vehicle_type: None,
            route: None,
            capitalize_target: false,
        }
    }

    #[test]
    fn min_columns_ignores_other_record_roles() {
        let cfg = minimal(vec![
            ColumnMapping { index: 0, role: ColumnRole::Time },
            ColumnMapping { index: 2, role: ColumnRole::Target },
            ColumnMapping { index: 7, role: ColumnRole::StopName },
        ]);
        assert_eq!(cfg.min_columns_for(ColumnRole::DEPARTURE), 3);
        assert_eq!(cfg.min_columns_for(ColumnRole::SUGGESTION), 8);
    }

    #[test]
    fn capabilities_follow_mapping() {
        let mut cfg = minimal(vec![
            ColumnMapping { index: 0, role: ColumnRole::Time },
            ColumnMapping { index: 1, role: ColumnRole::Target },
            ColumnMapping { index: 2, role: ColumnRole::Platform },
            ColumnMapping { index: 3, role: ColumnRole::Route },
        ]);
        assert_eq!(cfg.capabilities(), vec![Capability::Platform]);

        cfg.route = Some(RouteRules { delimiter: s!("\n-\n"), boundary: None });
        assert_eq!(
            cfg.capabilities(),
            vec![Capability::Platform, Capability::RouteStops, Capability::RouteTimes]
        );
    }

    #[test]
    fn sparse_mapping_is_allowed() {
        let cfg = minimal(vec![
            ColumnMapping { index: 4, role: ColumnRole::Time },
            ColumnMapping { index: 1, role: ColumnRole::Target },
        ]);
        assert_eq!(cfg.column_for(ColumnRole::Time), Some(4));
        assert_eq!(cfg.column_for(ColumnRole::Platform), None);
    }
}
