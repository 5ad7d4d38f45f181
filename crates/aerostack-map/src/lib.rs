//! `aerostack-map` - Terminal map widget for drone fleet positions
//!
//! This crate provides a self-contained ratatui widget that renders a set of
//! geographic markers on a braille canvas. Consumers hand it a viewport and a
//! list of [`Marker`]s; everything else (projection, colors, labels, the
//! too-small degradation notice) is the widget's own business.
//!
//! # Example
//!
//! ```
//! use aerostack_map::{MapView, Marker, MarkerKind, Viewport};
//!
//! let markers = vec![Marker::new("DX-042", -122.4094, 37.7849, MarkerKind::InTransit)];
//! let view = MapView::new(Viewport::default()).with_markers(markers);
//! // view is a ratatui Widget; render it into any frame area.
//! # let _ = view;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Paragraph, Widget};

/// Smallest zoom level the widget accepts (whole-world scale).
pub const MIN_ZOOM: u8 = 1;

/// Largest zoom level the widget accepts (street scale).
pub const MAX_ZOOM: u8 = 20;

/// Minimum render area width, in terminal cells, below which the widget
/// degrades to a notice instead of a map.
pub const MIN_WIDTH: u16 = 20;

/// Minimum render area height, in terminal cells, below which the widget
/// degrades to a notice instead of a map.
pub const MIN_HEIGHT: u16 = 6;

/// Longitude span of the whole world at zoom level 0.
const WORLD_LON_SPAN: f64 = 360.0;

/// The visible geographic window: a center point and a zoom level.
///
/// Zoom follows the usual slippy-map convention: each level halves the
/// visible longitude span. The default viewport is centered on downtown
/// San Francisco at zoom 12.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center of the view as (longitude, latitude).
    pub center: (f64, f64),
    /// Zoom level, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: (-122.4194, 37.7749),
            zoom: 12,
        }
    }
}

impl Viewport {
    /// Create a viewport, clamping the zoom level into the accepted range.
    #[must_use]
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Visible longitude span in degrees.
    #[must_use]
    pub fn lon_span(&self) -> f64 {
        WORLD_LON_SPAN / f64::from(1u32 << u32::from(self.zoom))
    }

    /// Visible latitude span in degrees.
    ///
    /// Half the longitude span, which compensates for terminal cells being
    /// roughly twice as tall as they are wide.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.lon_span() / 2.0
    }

    /// Longitude bounds as `[west, east]`.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center.0 - half, self.center.0 + half]
    }

    /// Latitude bounds as `[south, north]`.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.1 - half, self.center.1 + half]
    }

    /// Whether a coordinate falls inside the visible window.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        lon >= west && lon <= east && lat >= south && lat <= north
    }
}

/// Visual category of a marker, mapped to a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A unit parked and awaiting work.
    Idle,
    /// A unit moving between points.
    InTransit,
    /// A unit at its destination, handing off.
    Delivering,
}

impl MarkerKind {
    /// Canvas color for this marker kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Idle => Color::DarkGray,
            Self::InTransit => Color::Cyan,
            Self::Delivering => Color::Green,
        }
    }
}

/// A single labeled point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Label printed next to the marker.
    pub id: String,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Visual category.
    pub kind: MarkerKind,
    /// Whether this marker is drawn with a focus ring.
    pub focused: bool,
}

impl Marker {
    /// Create an unfocused marker.
    #[must_use]
    pub fn new(id: impl Into<String>, lon: f64, lat: f64, kind: MarkerKind) -> Self {
        Self {
            id: id.into(),
            lon,
            lat,
            kind,
            focused: false,
        }
    }

    /// Mark this marker as focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// The map widget itself.
///
/// Construct with [`MapView::new`], attach markers, then render like any
/// other ratatui widget. Areas smaller than [`MIN_WIDTH`] x [`MIN_HEIGHT`]
/// render a notice instead of a map; this is deliberate degradation, not an
/// error, so callers never need a fallible path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapView {
    viewport: Viewport,
    markers: Vec<Marker>,
}

impl MapView {
    /// Create a map view over the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            markers: Vec::new(),
        }
    }

    /// Attach the markers to draw.
    #[must_use]
    pub fn with_markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }

    /// Whether an area is large enough to draw a usable map.
    #[must_use]
    pub fn fits(area: Rect) -> bool {
        area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
    }

    /// The viewport this view draws.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The markers this view draws.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn render_notice(area: Rect, buf: &mut Buffer) {
        let notice = Paragraph::new("Map unavailable: enlarge the terminal to view drone positions")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        notice.render(area, buf);
    }

    fn render_canvas(&self, area: Rect, buf: &mut Buffer) {
        let [west, east] = self.viewport.x_bounds();
        let [south, north] = self.viewport.y_bounds();
        let center = self.viewport.center;
        let dot_radius = self.viewport.lon_span() / 80.0;

        let canvas = Canvas::default()
            .x_bounds([west, east])
            .y_bounds([south, north])
            .paint(|ctx| {
                // Crosshair through the viewport center as a spatial anchor.
                ctx.draw(&CanvasLine {
                    x1: west,
                    y1: center.1,
                    x2: east,
                    y2: center.1,
                    color: Color::DarkGray,
                });
                ctx.draw(&CanvasLine {
                    x1: center.0,
                    y1: south,
                    x2: center.0,
                    y2: north,
                    color: Color::DarkGray,
                });

                for marker in &self.markers {
                    if !self.viewport.contains(marker.lon, marker.lat) {
                        continue;
                    }
                    ctx.draw(&Circle {
                        x: marker.lon,
                        y: marker.lat,
                        radius: dot_radius,
                        color: marker.kind.color(),
                    });
                    if marker.focused {
                        ctx.draw(&Circle {
                            x: marker.lon,
                            y: marker.lat,
                            radius: dot_radius * 2.5,
                            color: Color::White,
                        });
                    }
                    let label_style = if marker.focused {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(marker.kind.color())
                    };
                    ctx.print(
                        marker.lon + dot_radius * 2.0,
                        marker.lat,
                        Line::styled(marker.id.clone(), label_style),
                    );
                }
            });
        canvas.render(area, buf);
    }
}

impl Widget for MapView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if Self::fits(area) {
            self.render_canvas(area, buf);
        } else {
            Self::render_notice(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_default_is_san_francisco() {
        let viewport = Viewport::default();
        assert!((viewport.center.0 - -122.4194).abs() < f64::EPSILON);
        assert!((viewport.center.1 - 37.7749).abs() < f64::EPSILON);
        assert_eq!(viewport.zoom, 12);
    }

    #[test]
    fn test_viewport_new_clamps_zoom() {
        assert_eq!(Viewport::new((0.0, 0.0), 0).zoom, MIN_ZOOM);
        assert_eq!(Viewport::new((0.0, 0.0), 42).zoom, MAX_ZOOM);
        assert_eq!(Viewport::new((0.0, 0.0), 12).zoom, 12);
    }

    #[test]
    fn test_lon_span_halves_per_zoom_level() {
        let near = Viewport::new((0.0, 0.0), 10);
        let far = Viewport::new((0.0, 0.0), 9);
        assert!((far.lon_span() - near.lon_span() * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_lat_span_is_half_lon_span() {
        let viewport = Viewport::default();
        assert!((viewport.lat_span() - viewport.lon_span() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_are_centered() {
        let viewport = Viewport::new((-122.0, 37.0), 12);
        let [west, east] = viewport.x_bounds();
        let [south, north] = viewport.y_bounds();
        assert!(((west + east) / 2.0 - -122.0).abs() < 1e-9);
        assert!(((south + north) / 2.0 - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_center_and_rejects_antipode() {
        let viewport = Viewport::default();
        assert!(viewport.contains(-122.4194, 37.7749));
        assert!(!viewport.contains(57.5806, -37.7749));
    }

    #[test]
    fn test_default_viewport_contains_fleet_coordinates() {
        let viewport = Viewport::default();
        for (lon, lat) in [
            (-122.4094, 37.7849),
            (-122.4294, 37.7649),
            (-122.4194, 37.7749),
            (-122.3994, 37.7949),
        ] {
            assert!(viewport.contains(lon, lat), "({lon}, {lat}) out of view");
        }
    }

    #[test]
    fn test_marker_kind_colors_are_distinct() {
        assert_ne!(MarkerKind::Idle.color(), MarkerKind::InTransit.color());
        assert_ne!(MarkerKind::InTransit.color(), MarkerKind::Delivering.color());
        assert_ne!(MarkerKind::Idle.color(), MarkerKind::Delivering.color());
    }

    #[test]
    fn test_marker_new_is_unfocused() {
        let marker = Marker::new("DX-042", -122.4094, 37.7849, MarkerKind::InTransit);
        assert_eq!(marker.id, "DX-042");
        assert!(!marker.focused);
    }

    #[test]
    fn test_marker_focused_builder() {
        let marker = Marker::new("DX-042", -122.4094, 37.7849, MarkerKind::InTransit).focused(true);
        assert!(marker.focused);
    }

    #[test]
    fn test_map_view_with_markers() {
        let view = MapView::new(Viewport::default()).with_markers(vec![
            Marker::new("a", 0.0, 0.0, MarkerKind::Idle),
            Marker::new("b", 1.0, 1.0, MarkerKind::Delivering),
        ]);
        assert_eq!(view.markers().len(), 2);
    }

    #[test]
    fn test_fits_thresholds() {
        assert!(MapView::fits(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT)));
        assert!(!MapView::fits(Rect::new(0, 0, MIN_WIDTH - 1, MIN_HEIGHT)));
        assert!(!MapView::fits(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT - 1)));
    }

    #[test]
    fn test_render_small_area_degrades_without_panic() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let view = MapView::new(Viewport::default())
            .with_markers(vec![Marker::new("a", 0.0, 0.0, MarkerKind::Idle)]);
        view.render(area, &mut buf);
        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(text.contains("Map"));
    }

    #[test]
    fn test_render_draws_markers_without_panic() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let view = MapView::new(Viewport::default()).with_markers(vec![
            Marker::new("DX-042", -122.4094, 37.7849, MarkerKind::InTransit).focused(true),
            Marker::new("DX-038", -122.4294, 37.7649, MarkerKind::Idle),
        ]);
        view.render(area, &mut buf);
    }
}
