//! Core order types for aerostack.
//!
//! This module defines the order record and the closed status/priority
//! enumerations used throughout the dashboard.

use serde::{Deserialize, Serialize};

/// Delivery status of an order.
///
/// This is a closed set; every consumption site matches exhaustively so that
/// adding a status is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Accepted but not yet picked up by a drone.
    Pending,
    /// Airborne, on the way to the destination.
    InTransit,
    /// Handed off at the destination.
    Delivered,
    /// Withdrawn before delivery.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in selector cycling order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::InTransit, Self::Delivered, Self::Cancelled];

    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InTransit => write!(f, "in-transit"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Delivery priority of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Deliver ahead of everything else.
    High,
    /// Normal service level.
    Medium,
    /// Deliver when convenient.
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A delivery order.
///
/// Records are immutable for the session: the data source produces the full
/// sequence once and nothing creates, mutates, or destroys entries afterward.
/// `estimated_time` and `distance` are display text, not structured values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier, e.g. `ORD-8392`.
    pub id: String,
    /// Customer display name.
    pub customer: String,
    /// Free-text delivery address.
    pub destination: String,
    /// Identifier of the assigned drone. Not checked against the fleet.
    pub drone_id: String,
    /// Current delivery status.
    pub status: OrderStatus,
    /// Display text for the estimated time of arrival.
    pub estimated_time: String,
    /// Display text for the flight distance.
    pub distance: String,
    /// Delivery priority.
    pub priority: Priority,
}
