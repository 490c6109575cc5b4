// File: crates/chart-core/src/cartesian.rs
// Summary: Rectangular chart renderers: line, histogram, bubble.

use log::debug;

use crate::chart::{RenderOptions, MARKER_RADIUS};
use crate::grid;
use crate::primitive::{circle, frame, polyline, rect, Primitive};
use crate::scale::{Domain, XScale, YScale};
use crate::series::Dataset;

/// Line chart over a `w x h` frame. The first series carries the x values;
/// every following series is plotted as a polyline plus per-point markers,
/// colored by series index. The vertical domain is the min/max union across
/// all plotted series so they share one frame. Series longer than the
/// x series are truncated to it (and vice versa).
pub fn line(w: f64, h: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("line: {} series into {}x{}", data.len(), w, h);
    let mut root = frame(w, h).class("line");
    if options.grid {
        root.push(grid::grid(w, h));
    }
    for axis in grid::axes(w, h, 0.0, h - 1.0) {
        root.push(axis);
    }

    let xs = data.values(0);
    let x = XScale::fit(Domain::of(xs.iter().copied()), w);
    let y_domain = data
        .series
        .iter()
        .skip(1)
        .fold(Domain::EMPTY, |d, s| d.union(Domain::of(s.values.iter().copied())));
    let y = YScale::fit(y_domain, h);

    for (k, s) in data.series.iter().skip(1).enumerate() {
        let idx = options.palette.index(k);
        let color = options.palette.color(k);
        let n = s.values.len().min(xs.len());
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            points.push((x.to_px(xs[i]), y.to_px(s.values[i])));
        }
        for &(cx, cy) in &points {
            root.push(
                circle(MARKER_RADIUS, cx, cy)
                    .class(format!("set{idx}"))
                    .style(format!("fill:{color}")),
            );
        }
        root.push(
            polyline(points)
                .class(format!("lineset{idx}"))
                .style(format!("fill:none;stroke:{color}")),
        );
    }
    root
}

/// Histogram over a `w x h` frame. Bars are grouped per index position, one
/// bar per series inside each group, drawn upward from the zero baseline for
/// positive values and downward for negative ones. The vertical domain is
/// the min/max union across all series, widened to include zero so the
/// baseline stays inside the frame.
pub fn histogram(w: f64, h: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("histogram: {} series into {}x{}", data.len(), w, h);
    let mut root = frame(w, h).class("histogram");
    if options.grid {
        root.push(grid::grid(w, h));
    }

    let domain = data
        .series
        .iter()
        .fold(Domain::EMPTY, |d, s| d.union(Domain::of(s.values.iter().copied())))
        .include(0.0);
    let y = YScale::fit(domain, h);
    let baseline = y.to_px(0.0);

    let groups = data.values(0).len();
    let set_count = data.len();
    // one pixel of padding around each group: N+1 gaps across the frame
    let bar_w = (w - (groups as f64 + 1.0)) / (set_count as f64 * groups as f64);

    for i in 0..groups {
        let group_x = 1.0 + i as f64 * (set_count as f64 * bar_w + 1.0);
        for (k, s) in data.series.iter().enumerate() {
            let Some(&v) = s.values.get(i) else { continue };
            let top = y.to_px(v);
            let (ry, rh) = if v >= 0.0 { (top, baseline - top) } else { (baseline, top - baseline) };
            root.push(
                rect(group_x + k as f64 * bar_w, ry, bar_w - 1.0, rh)
                    .class(format!("set{}", options.palette.index(k)))
                    .style(format!("fill:{}", options.palette.color(k))),
            );
        }
    }

    for axis in grid::axes(w, h, 0.0, baseline.min(h - 1.0)) {
        root.push(axis);
    }
    root
}

/// Bubble chart over a `w x h` frame from exactly three series: x values,
/// y values, and radii. Each point becomes an outline circle whose radius is
/// the raw third-series value, in pixel units (not scaled to the frame).
pub fn bubble(w: f64, h: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("bubble: {} series into {}x{}", data.len(), w, h);
    let mut root = frame(w, h).class("bubble");
    if options.grid {
        root.push(grid::grid(w, h));
    }
    for axis in grid::axes(w, h, 0.0, h - 1.0) {
        root.push(axis);
    }

    let xs = data.values(0);
    let ys = data.values(1);
    let rs = data.values(2);
    let x = XScale::fit(Domain::of(xs.iter().copied()), w);
    let y = YScale::fit(Domain::of(ys.iter().copied()), h);

    let color = options.palette.color(0);
    for ((&xv, &yv), &rv) in xs.iter().zip(ys).zip(rs) {
        root.push(
            circle(rv, x.to_px(xv), y.to_px(yv))
                .class("set0")
                .style(format!("fill:none;stroke:{color}")),
        );
    }
    root
}
