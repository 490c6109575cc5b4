// File: crates/chart-core/src/chart.rs
// Summary: Render options, chart kinds, and placeholder renderers.

use crate::primitive::{frame, text, Primitive, Shape};
use crate::series::Dataset;
use crate::theme::Palette;

/// Marker radius for line and radar data points, in pixels.
pub const MARKER_RADIUS: f64 = 3.0;

/// Coordinate interpretation for polar charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolarMode {
    #[default]
    Angular,
    Xy,
}

/// Chart kinds exposed by this crate. `Polar`, `Map`, and `Gantt` are
/// placeholders with no real geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Histogram,
    Pie,
    Donut,
    Bubble,
    Radar,
    Gauge,
    Polar,
    Map,
    Gantt,
}

impl ChartKind {
    /// Stable class name on the chart root, part of the styling contract.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Histogram => "histogram",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Bubble => "bubble",
            Self::Radar => "radar",
            Self::Gauge => "gauge",
            Self::Polar => "polar",
            Self::Map => "map",
            Self::Gantt => "gantt",
        }
    }
}

/// Per-call rendering configuration, resolved once at every entry point.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Emit the background grid (rectangular charts).
    pub grid: bool,
    /// Coordinate mode for polar charts.
    pub mode: PolarMode,
    /// Lower bound override for gauge readings; defaults to `0.0`.
    pub min: Option<f64>,
    /// Upper bound override for gauge readings; defaults to `1.0`.
    pub max: Option<f64>,
    /// Series colors, cycled by index.
    pub palette: Palette,
    /// Background color token, used to cut the donut hole.
    pub background: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid: true,
            mode: PolarMode::default(),
            min: None,
            max: None,
            palette: Palette::default(),
            background: "#ffffff".to_string(),
        }
    }
}

impl RenderOptions {
    /// Gauge value bounds with defaults applied.
    pub(crate) fn gauge_bounds(&self) -> (f64, f64) {
        (self.min.unwrap_or(0.0), self.max.unwrap_or(1.0))
    }
}

/// Placeholder: polar charts are not implemented. The root records the
/// requested mode in its class (`polar` vs `polar-xy`) and nothing else.
pub fn polar(r: f64, _data: &Dataset, options: &RenderOptions) -> Primitive {
    let class = match options.mode {
        PolarMode::Angular => "polar",
        PolarMode::Xy => "polar-xy",
    };
    frame(2.0 * r, 2.0 * r).class(class)
}

/// Placeholder: map charts are not implemented.
pub fn map(_w: f64, _h: f64, _data: &Dataset, _options: &RenderOptions) -> Primitive {
    Primitive::new(Shape::Group { width: None, height: None }).class("map")
}

/// Placeholder: gantt charts are not implemented; the root carries a
/// single label so the gap is visible in output.
pub fn gantt(w: f64, h: f64, _data: &Dataset, _options: &RenderOptions) -> Primitive {
    let mut root = frame(w, h).class("gantt");
    root.push(text(w / 2.0, h / 2.0, "GANTT"));
    root
}
