// File: crates/chart-core/src/radial.rs
// Summary: Circular chart renderers: pie, donut, radar, gauge.

use std::f64::consts::{PI, TAU};

use log::debug;

use crate::chart::{RenderOptions, MARKER_RADIUS};
use crate::primitive::{circle, container, frame, path, polygon, px, text, Primitive, Shape};
use crate::scale::Domain;
use crate::series::{Dataset, Series};

/// Ratio of the inner cutout radius to the outer radius (donut hole,
/// gauge ring).
pub const INNER_RADIUS: f64 = 0.667;

/// Pie chart of radius `r`. Every series contributes one scalar; slices
/// sweep `2pi * value / total` each, accumulated in series order, with a
/// tooltip reporting the percentage to one decimal place (floored).
/// Degenerate input (total <= 0 or fewer than two entries) renders a single
/// full circle in the first palette color.
pub fn pie(r: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("pie: {} slices, radius {}", data.len(), r);
    let mut root = frame(2.0 * r, 2.0 * r).class("pie");
    let c = px(r);
    let total: f64 = data.series.iter().map(Series::scalar).sum();
    if total > 0.0 && data.len() > 1 {
        let mut start = 0.0_f64;
        for (k, s) in data.series.iter().enumerate() {
            let value = s.scalar();
            let end = start + TAU * value / total;
            let large = if 2.0 * value > total { 1 } else { 0 };
            let d = format!(
                "M{c},{c} L{},{} A{c},{c} 0 {large},1 {},{}",
                px(r + r * start.cos()),
                px(r + r * start.sin()),
                px(r + r * end.cos()),
                px(r + r * end.sin()),
            );
            let percent = (1000.0 * value / total).floor() / 10.0;
            root.push(
                path(d)
                    .class(format!("set{}", options.palette.index(k)))
                    .style(format!("fill:{}", options.palette.color(k)))
                    .title(format!("{percent}%")),
            );
            start = end;
        }
    } else {
        root.push(circle(r, r, r).style(format!("fill:{}", options.palette.color(0))));
    }
    root
}

/// Donut chart: a pie with a concentric hole of radius [`INNER_RADIUS`]` * r`
/// cut by overlaying a circle in the background color. The degenerate
/// single-circle pie is left untouched.
pub fn donut(r: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    let mut root = pie(r, data, options).class("donut");
    let degenerate = matches!(root.children.first().map(|p| &p.shape), Some(Shape::Circle { .. }));
    if !degenerate {
        root.push(circle(INNER_RADIUS * r, r, r).style(format!("fill:{}", options.background)));
    }
    root
}

/// Radar chart of radius `r`. Spokes radiate from the center at
/// `2pi * i / len` using the first series' length; each series becomes a
/// closed polygon whose vertex radius is proportional to
/// `(value - min) / (max - min)` over the global domain, with a marker
/// circle at every vertex.
pub fn radar(r: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("radar: {} series, radius {}", data.len(), r);
    let mut root = frame(2.0 * r, 2.0 * r).class("radar");
    let c = px(r);
    let domain = data
        .series
        .iter()
        .fold(Domain::EMPTY, |d, s| d.union(Domain::of(s.values.iter().copied())));

    let mut spokes = String::new();
    if let Some(first) = data.series.first() {
        let step = TAU / first.len() as f64;
        for i in 0..first.len() {
            let a = step * i as f64;
            spokes.push_str(&format!("M{c},{c} l{},{} ", px(r * a.cos()), px(r * a.sin())));
        }
    }

    for (k, s) in data.series.iter().enumerate() {
        let idx = options.palette.index(k);
        let color = options.palette.color(k);
        let step = TAU / s.len() as f64;
        let mut points = Vec::with_capacity(s.len());
        for (i, &v) in s.values.iter().enumerate() {
            let a = step * i as f64;
            let radius = r * domain.fraction(v);
            let (vx, vy) = (r + radius * a.cos(), r + radius * a.sin());
            points.push((vx, vy));
            root.push(
                circle(MARKER_RADIUS, vx, vy)
                    .class(format!("set{idx}"))
                    .style(format!("fill:{color}")),
            );
        }
        root.push(
            polygon(points)
                .class(format!("lineset{idx}"))
                .style(format!("fill:none;stroke:{color}")),
        );
    }

    root.insert_first(path(spokes).class("axes"));
    root
}

/// Gauge panel. Each series contributes one reading rendered as its own
/// half-circle dial of radius `r`: a background half-annulus with inner
/// cutout [`INNER_RADIUS`]` * r`, a colored wedge spanning the fraction
/// `(value - min) / (max - min)` of the half-circle, and centered value and
/// label texts. Bounds default to 0..1. Dials pack into one container in
/// input order.
pub fn gauge(r: f64, data: &Dataset, options: &RenderOptions) -> Primitive {
    debug!("gauge: {} readings, radius {}", data.len(), r);
    let (min, max) = options.gauge_bounds();
    let mut panel = container();
    let c = px(r);
    let sr = (INNER_RADIUS * r).floor();
    let font = (r / 3.0).floor();

    for (k, s) in data.series.iter().enumerate() {
        let value = s.scalar();
        let fraction = (value - min) / (max - min);
        let mut dial = frame(2.0 * r, 2.0 * r).class("gauge");

        dial.push(text(r, r, format_reading(s, fraction)).font_size(font));
        dial.push(text(r, (1.5 * r).floor(), s.label.clone().unwrap_or_default()).font_size(font));

        // background half-annulus, left edge over the top to the right edge
        dial.push(path(format!(
            "M0,{c} A{c},{c} 0 1,1 {},{c} H{} A{sr},{sr} 0 0,0 {},{c} z",
            px(2.0 * r),
            px(r + sr),
            px(r - sr),
        )));

        // wedge from the left edge sweeping `fraction` of the half-circle
        let a = PI * (1.0 - fraction);
        dial.push(
            path(format!(
                "M0,{c} A{c},{c} 0 0,1 {},{} L{},{} A{sr},{sr} 0 0,0 {},{c} z",
                px(r + r * a.cos()),
                px(r - r * a.sin()),
                px(r + sr * a.cos()),
                px(r - sr * a.sin()),
                px(r - sr),
            ))
            .class(format!("set{}", options.palette.index(k)))
            .style(format!("fill:{}", options.palette.color(k))),
        );

        panel.push(dial);
    }
    panel
}

/// Reading text: raw value plus units when the series carries units,
/// otherwise the fraction as a percentage with one floored decimal.
fn format_reading(s: &Series, fraction: f64) -> String {
    match &s.units {
        Some(units) => format!("{}{units}", s.scalar()),
        None => format!("{}%", (1000.0 * fraction).floor() / 10.0),
    }
}
