//! Adapter between the fleet records and the map widget.
//!
//! The widget crate has its own marker API; this module converts
//! [`DroneLocation`] records into it and decides which marker carries the
//! focus ring. Widget internals (projection, degradation on small areas)
//! stay on the widget's side of the seam.

use aerostack_map::{MapView, Marker, MarkerKind, Viewport};

use crate::fleet::{DroneLocation, DroneStatus};

/// Build the map widget for the current fleet and selection.
///
/// `focused_drone` is the drone assigned to the selected order; an id with
/// no matching fleet record simply leaves every marker unfocused.
#[must_use]
pub fn map_view(
    viewport: Viewport,
    drones: &[DroneLocation],
    focused_drone: Option<&str>,
) -> MapView {
    MapView::new(viewport).with_markers(drones.iter().map(|drone| {
        Marker::new(
            drone.id.clone(),
            drone.coordinates.0,
            drone.coordinates.1,
            marker_kind(drone.status),
        )
        .focused(focused_drone == Some(drone.id.as_str()))
    }))
}

fn marker_kind(status: DroneStatus) -> MarkerKind {
    match status {
        DroneStatus::Idle => MarkerKind::Idle,
        DroneStatus::InTransit => MarkerKind::InTransit,
        DroneStatus::Delivering => MarkerKind::Delivering,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    #[test]
    fn test_one_marker_per_drone() {
        let data = StaticSource::data_set();
        let view = map_view(Viewport::default(), &data.drones, None);
        assert_eq!(view.markers().len(), data.drones.len());
    }

    #[test]
    fn test_marker_kind_follows_status() {
        let data = StaticSource::data_set();
        let view = map_view(Viewport::default(), &data.drones, None);
        let kinds: Vec<MarkerKind> = view.markers().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarkerKind::InTransit,
                MarkerKind::Idle,
                MarkerKind::Delivering,
                MarkerKind::InTransit,
            ]
        );
    }

    #[test]
    fn test_focus_follows_selected_drone() {
        let data = StaticSource::data_set();
        let view = map_view(Viewport::default(), &data.drones, Some("DX-051"));
        let focused: Vec<&str> = view
            .markers()
            .iter()
            .filter(|m| m.focused)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(focused, vec!["DX-051"]);
    }

    #[test]
    fn test_unknown_focus_id_focuses_nothing() {
        let data = StaticSource::data_set();
        let view = map_view(Viewport::default(), &data.drones, Some("DX-015"));
        assert!(view.markers().iter().all(|m| !m.focused));
    }

    #[test]
    fn test_marker_coordinates_pass_through() {
        let data = StaticSource::data_set();
        let view = map_view(Viewport::default(), &data.drones, None);
        let first = &view.markers()[0];
        assert!((first.lon - -122.4094).abs() < f64::EPSILON);
        assert!((first.lat - 37.7849).abs() < f64::EPSILON);
    }
}
