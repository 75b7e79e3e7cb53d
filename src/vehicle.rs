// src/vehicle.rs
//! Closed vehicle-type vocabulary with a lossy-tolerant fallback.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical vehicle types. Provider tokens map into this vocabulary via a
/// per-provider table; anything unmapped is carried through as
/// `Unmapped(lowercased raw token)` so callers can treat known types
/// exhaustively and still see what the provider actually said.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    InterurbanTrain,
    Subway,
    Metro,
    TrolleyBus,
    Tram,
    Bus,
    HighSpeedTrain,
    IntercityTrain,
    RegionalExpressTrain,
    RegionalTrain,
    InterRegionalTrain,
    Ferry,
    Ship,
    Plane,
    Feet,
    Unmapped(String),
}

impl VehicleType {
    /// Canonical tag, e.g. "interurban-train". `Unmapped` yields the
    /// provider's own (lowercased) token.
    pub fn tag(&self) -> &str {
        match self {
            VehicleType::InterurbanTrain => "interurban-train",
            VehicleType::Subway => "subway",
            VehicleType::Metro => "metro",
            VehicleType::TrolleyBus => "trolley-bus",
            VehicleType::Tram => "tram",
            VehicleType::Bus => "bus",
            VehicleType::HighSpeedTrain => "high-speed-train",
            VehicleType::IntercityTrain => "intercity-train",
            VehicleType::RegionalExpressTrain => "regional-express-train",
            VehicleType::RegionalTrain => "regional-train",
            VehicleType::InterRegionalTrain => "inter-regional-train",
            VehicleType::Ferry => "ferry",
            VehicleType::Ship => "ship",
            VehicleType::Plane => "plane",
            VehicleType::Feet => "feet",
            VehicleType::Unmapped(raw) => raw,
        }
    }

    /// Case-insensitive lookup in a provider vocabulary table. An unmapped
    /// token is never a hard failure.
    pub fn from_token(token: &str, table: &HashMap<String, VehicleType>) -> VehicleType {
        let lower = token.trim().to_lowercase();
        match table.get(&lower) {
            Some(v) => v.clone(),
            None => VehicleType::Unmapped(lower),
        }
    }
}
