// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart data model and renderers.

//! Declarative charting: pure functions from (size, dataset, options) to a
//! tree of drawing primitives. The tree is backend-agnostic; a rendering
//! collaborator (such as the `inkchart-svg` crate) turns it into display
//! output. Renderers never touch a surface, keep no state between calls,
//! and always succeed: malformed input degrades to degenerate geometry
//! rather than raising errors.

pub mod cartesian;
pub mod chart;
pub mod error;
pub mod grid;
pub mod primitive;
pub mod radial;
pub mod scale;
pub mod series;
pub mod theme;

pub use cartesian::{bubble, histogram, line};
pub use chart::{gantt, map, polar, ChartKind, PolarMode, RenderOptions, MARKER_RADIUS};
pub use error::DataError;
pub use primitive::{Primitive, Shape, TextAnchor};
pub use radial::{donut, gauge, pie, radar, INNER_RADIUS};
pub use scale::{Domain, XScale, YScale, VERTICAL_MARGIN};
pub use series::{Dataset, Series};
pub use theme::Palette;
