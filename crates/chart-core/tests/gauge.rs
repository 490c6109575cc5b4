// File: crates/chart-core/tests/gauge.rs
// Purpose: Gauge dial composition, wedge sweep, and reading formats.

use inkchart_core::{gauge, Dataset, Primitive, RenderOptions, Series, Shape};

fn texts(dial: &Primitive) -> Vec<&str> {
    dial.children
        .iter()
        .filter_map(|p| match &p.shape {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

fn paths(dial: &Primitive) -> Vec<&Primitive> {
    dial.children
        .iter()
        .filter(|p| matches!(p.shape, Shape::Path { .. }))
        .collect()
}

#[test]
fn half_reading_sweeps_half_the_arc() {
    let data = Dataset::new(vec![Series::scalar_value(0.5).with_label("X")]);
    let opts = RenderOptions { min: Some(0.0), max: Some(1.0), ..Default::default() };
    let panel = gauge(40.0, &data, &opts);

    assert!(matches!(panel.shape, Shape::Container));
    assert_eq!(panel.children.len(), 1);
    let dial = &panel.children[0];
    assert_eq!(dial.class.as_deref(), Some("gauge"));

    // background annulus plus the value wedge
    let arcs = paths(dial);
    assert_eq!(arcs.len(), 2);
    assert_eq!(
        match &arcs[0].shape {
            Shape::Path { d } => d.as_str(),
            _ => unreachable!(),
        },
        "M0,40 A40,40 0 1,1 80,40 H66 A26,26 0 0,0 14,40 z"
    );
    // wedge ends at the top of the dial: exactly half of the half-circle
    assert_eq!(
        match &arcs[1].shape {
            Shape::Path { d } => d.as_str(),
            _ => unreachable!(),
        },
        "M0,40 A40,40 0 0,1 40,0 L40,14 A26,26 0 0,0 14,40 z"
    );
    assert_eq!(arcs[1].class.as_deref(), Some("set0"));

    assert_eq!(texts(dial), vec!["50%", "X"]);
}

#[test]
fn bounds_rescale_the_fraction() {
    let data = Dataset::new(vec![Series::scalar_value(25.0).with_label("load")]);
    let opts = RenderOptions { min: Some(0.0), max: Some(100.0), ..Default::default() };
    let panel = gauge(40.0, &data, &opts);
    assert_eq!(texts(&panel.children[0])[0], "25%");
}

#[test]
fn units_replace_the_percent_format() {
    let data = Dataset::new(vec![Series::scalar_value(23.0).with_label("temp").with_units("C")]);
    let opts = RenderOptions { min: Some(0.0), max: Some(50.0), ..Default::default() };
    let panel = gauge(40.0, &data, &opts);
    assert_eq!(texts(&panel.children[0])[0], "23C");
}

#[test]
fn readings_pack_in_input_order() {
    let data = Dataset::new(vec![
        Series::scalar_value(0.2).with_label("a"),
        Series::scalar_value(0.8).with_label("b"),
    ]);
    let panel = gauge(40.0, &data, &RenderOptions::default());
    assert_eq!(panel.children.len(), 2);
    assert_eq!(texts(&panel.children[0])[1], "a");
    assert_eq!(texts(&panel.children[1])[1], "b");
    // wedge colors cycle by reading index
    let wedge = |i: usize| paths(&panel.children[i])[1].class.clone();
    assert_eq!(wedge(0).as_deref(), Some("set0"));
    assert_eq!(wedge(1).as_deref(), Some("set1"));
}

#[test]
fn label_text_uses_the_dial_font() {
    let data = Dataset::new(vec![Series::scalar_value(0.5).with_label("X")]);
    let panel = gauge(40.0, &data, &RenderOptions::default());
    for t in &panel.children[0].children {
        if let Shape::Text { font_size, y, .. } = &t.shape {
            assert_eq!(*font_size, Some(13.0)); // floor(40 / 3)
            assert!(*y == 40.0 || *y == 60.0);
        }
    }
}
