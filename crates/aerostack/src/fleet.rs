//! Drone fleet types for aerostack.

use serde::{Deserialize, Serialize};

/// Activity status of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DroneStatus {
    /// Parked, awaiting an assignment.
    Idle,
    /// Flying between points.
    InTransit,
    /// At the destination, handing off a package.
    Delivering,
}

impl DroneStatus {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InTransit => "In Transit",
            Self::Delivering => "Delivering",
        }
    }
}

impl std::fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::InTransit => write!(f, "in-transit"),
            Self::Delivering => write!(f, "delivering"),
        }
    }
}

/// Last reported position of a drone.
///
/// Coordinates are (longitude, latitude) with no validity bounds enforced;
/// the map widget simply skips points outside its viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneLocation {
    /// Drone identifier, e.g. `DX-042`.
    pub id: String,
    /// Position as (longitude, latitude).
    pub coordinates: (f64, f64),
    /// Activity status.
    pub status: DroneStatus,
}
