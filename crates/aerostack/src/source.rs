//! Data sources for orders and drone positions.
//!
//! The dashboard reads its records through the [`OrderSource`] seam so the
//! UI layer never cares where the data came from. Two sources exist today:
//! the built-in demonstration set and a JSON file with the same shape. A
//! future backend integration slots in behind the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fleet::{DroneLocation, DroneStatus};
use crate::order::{Order, OrderStatus, Priority};

/// The full record set the dashboard operates on.
///
/// Fixed once loaded: nothing creates, mutates, or destroys entries for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSet {
    /// All orders, most recent first in the built-in set.
    pub orders: Vec<Order>,
    /// Last known drone positions.
    pub drones: Vec<DroneLocation>,
}

/// A provider of the dashboard's record set.
pub trait OrderSource {
    /// Produce the full record set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read or parsed.
    fn load(&self) -> Result<DataSet>;
}

/// The built-in demonstration data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl StaticSource {
    /// The demonstration record set.
    #[must_use]
    pub fn data_set() -> DataSet {
        let order = |id: &str,
                     customer: &str,
                     destination: &str,
                     drone_id: &str,
                     status: OrderStatus,
                     estimated_time: &str,
                     distance: &str,
                     priority: Priority| Order {
            id: id.to_string(),
            customer: customer.to_string(),
            destination: destination.to_string(),
            drone_id: drone_id.to_string(),
            status,
            estimated_time: estimated_time.to_string(),
            distance: distance.to_string(),
            priority,
        };

        let drone = |id: &str, lon: f64, lat: f64, status: DroneStatus| DroneLocation {
            id: id.to_string(),
            coordinates: (lon, lat),
            status,
        };

        DataSet {
            orders: vec![
                order(
                    "ORD-8392",
                    "Sarah Johnson",
                    "123 Market St, SF",
                    "DX-042",
                    OrderStatus::InTransit,
                    "15 min",
                    "3.2 km",
                    Priority::High,
                ),
                order(
                    "ORD-8391",
                    "Michael Chen",
                    "456 Mission Blvd",
                    "DX-038",
                    OrderStatus::Pending,
                    "25 min",
                    "5.8 km",
                    Priority::Medium,
                ),
                order(
                    "ORD-8390",
                    "Emma Davis",
                    "789 Valencia St",
                    "DX-051",
                    OrderStatus::Delivered,
                    "Completed",
                    "2.1 km",
                    Priority::Low,
                ),
                order(
                    "ORD-8389",
                    "James Wilson",
                    "321 Broadway Ave",
                    "DX-029",
                    OrderStatus::InTransit,
                    "8 min",
                    "1.5 km",
                    Priority::High,
                ),
                order(
                    "ORD-8388",
                    "Olivia Brown",
                    "654 Castro St",
                    "DX-015",
                    OrderStatus::Delivered,
                    "Completed",
                    "4.3 km",
                    Priority::Medium,
                ),
            ],
            drones: vec![
                drone("DX-042", -122.4094, 37.7849, DroneStatus::InTransit),
                drone("DX-038", -122.4294, 37.7649, DroneStatus::Idle),
                drone("DX-051", -122.4194, 37.7749, DroneStatus::Delivering),
                drone("DX-029", -122.3994, 37.7949, DroneStatus::InTransit),
            ],
        }
    }
}

impl OrderSource for StaticSource {
    fn load(&self) -> Result<DataSet> {
        debug!("Loading built-in record set");
        Ok(Self::data_set())
    }
}

/// A JSON file source.
///
/// The file holds one object with `orders` and `drones` arrays whose records
/// serialize exactly like [`DataSet`]; either array may be omitted.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source reading from the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSource for JsonSource {
    fn load(&self) -> Result<DataSet> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| Error::data_file(&self.path, source))?;
        let data: DataSet =
            serde_json::from_str(&raw).map_err(|source| Error::data_parse(&self.path, source))?;
        info!(
            path = %self.path.display(),
            orders = data.orders.len(),
            drones = data.drones.len(),
            "Loaded data file"
        );
        Ok(data)
    }
}

/// Pick the source for an optional data file path: the JSON file when one is
/// configured, the built-in set otherwise.
#[must_use]
pub fn select(data_path: Option<&Path>) -> Box<dyn OrderSource> {
    match data_path {
        Some(path) => Box::new(JsonSource::new(path)),
        None => Box::new(StaticSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_shape() {
        let data = StaticSource::data_set();
        assert_eq!(data.orders.len(), 5);
        assert_eq!(data.drones.len(), 4);
        assert_eq!(data.orders[0].id, "ORD-8392");
        assert_eq!(data.orders[4].id, "ORD-8388");
        assert_eq!(data.drones[0].id, "DX-042");
    }

    #[test]
    fn test_static_source_load_matches_data_set() {
        let loaded = StaticSource.load().unwrap();
        assert_eq!(loaded, StaticSource::data_set());
    }

    #[test]
    fn test_static_source_statuses() {
        let data = StaticSource::data_set();
        let statuses: Vec<OrderStatus> = data.orders.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::InTransit,
                OrderStatus::Pending,
                OrderStatus::Delivered,
                OrderStatus::InTransit,
                OrderStatus::Delivered,
            ]
        );
    }

    #[test]
    fn test_data_set_round_trip() {
        let data = StaticSource::data_set();
        let json = serde_json::to_string(&data).unwrap();
        let back: DataSet = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }

    #[test]
    fn test_data_set_partial_object_parses() {
        let data: DataSet = serde_json::from_str(r#"{"orders": []}"#).unwrap();
        assert!(data.orders.is_empty());
        assert!(data.drones.is_empty());
    }

    #[test]
    fn test_json_source_missing_file() {
        let source = JsonSource::new("/nonexistent/orders.json");
        let err = source.load().unwrap_err();
        assert!(err.is_data_error());
        assert!(err.to_string().contains("/nonexistent/orders.json"));
    }

    #[test]
    fn test_json_source_reads_written_set() {
        let dir = std::env::temp_dir().join("aerostack-source-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("orders.json");
        let data = StaticSource::data_set();
        fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let loaded = JsonSource::new(&path).load().unwrap();
        assert_eq!(loaded, data);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_source_rejects_malformed_file() {
        let dir = std::env::temp_dir().join("aerostack-source-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        fs::write(&path, "{\"orders\": [{\"id\": 1}]}").unwrap();

        let err = JsonSource::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::DataParse { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_select_prefers_configured_path() {
        let source = select(Some(Path::new("/tmp/x.json")));
        assert!(source.load().is_err());

        let source = select(None);
        assert_eq!(source.load().unwrap().orders.len(), 5);
    }
}
