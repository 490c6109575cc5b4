// File: crates/chart-core/src/grid.rs
// Summary: Background grid and axes builders for rectangular charts.

use crate::primitive::{line, path, px, Primitive};

/// Distance between neighboring grid strokes, in pixels.
pub const GRID_STEP: f64 = 10.0;

/// Uniform background grid: horizontal and vertical strokes every
/// [`GRID_STEP`] pixels, covering `max(w, h)`. A fixed visual texture,
/// not aligned to data ticks.
pub fn grid(w: f64, h: f64) -> Primitive {
    let mut d = String::new();
    let extent = w.max(h);
    let mut i = 0.0;
    while i <= extent {
        d.push_str(&format!("M0 {} H{} M{} 0 V{} ", px(i), px(w), px(i), px(h)));
        i += GRID_STEP;
    }
    path(d).class("grid")
}

/// Axes pair anchored at the data origin projected into pixel space:
/// a vertical stroke at `origin_x` and a horizontal baseline at
/// `baseline_y`. For negative vertical ranges the caller offsets the
/// baseline by `min * factor` (the pixel position of value zero).
pub fn axes(w: f64, h: f64, origin_x: f64, baseline_y: f64) -> [Primitive; 2] {
    [
        line(origin_x, 0.0, origin_x, h - 1.0).class("axes"),
        line(0.0, baseline_y, w - 1.0, baseline_y).class("axes"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Shape;

    #[test]
    fn grid_covers_the_larger_dimension() {
        let g = grid(30.0, 50.0);
        let d = match &g.shape {
            Shape::Path { d } => d.clone(),
            _ => unreachable!(),
        };
        // strokes at 0, 10, 20, 30, 40, 50
        assert_eq!(d.matches("H30").count(), 6);
        assert_eq!(d.matches("V50").count(), 6);
        assert!(d.contains("M0 50 H30 M50 0 V50"));
        assert_eq!(g.class.as_deref(), Some("grid"));
    }

    #[test]
    fn axes_sit_on_the_requested_baseline() {
        let [v, b] = axes(100.0, 80.0, 0.0, 60.0);
        assert_eq!(v.shape, Shape::Line { x1: 0.0, y1: 0.0, x2: 0.0, y2: 79.0 });
        assert_eq!(b.shape, Shape::Line { x1: 0.0, y1: 60.0, x2: 99.0, y2: 60.0 });
    }
}
