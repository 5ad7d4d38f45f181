//! `aerostack` - Drone delivery operations dashboard
//!
//! This library provides the core functionality behind the `aerodeck`
//! terminal dashboard: the order and fleet data model, search/status
//! filtering, aggregate statistics, and the view composition that feeds the
//! stat cards, the orders table, and the fleet map.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod order;
pub mod query;
pub mod source;
pub mod stats;
pub mod ui;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use fleet::{DroneLocation, DroneStatus};
pub use logging::init_logging;
pub use order::{Order, OrderStatus, Priority};
pub use query::{OrderQuery, StatusFilter};
pub use source::{DataSet, JsonSource, OrderSource, StaticSource};
pub use stats::OrderStats;
pub use view::{OrdersViewModel, StatCard};
