// File: crates/demo/src/main.rs
// Summary: Demo renders a sample of every chart kind into target/demo/.

use std::path::{Path, PathBuf};

use anyhow::Result;
use inkchart_core::{
    bubble, donut, gantt, gauge, histogram, line, map, pie, polar, radar, Dataset, Primitive,
    RenderOptions, Series,
};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/demo"));
    let opts = RenderOptions::default();

    let xy = Dataset::from_values(vec![
        (0..40).map(|i| i as f64).collect(),
        (0..40).map(|i| (i as f64 * 0.3).sin() * 4.0 + 5.0).collect(),
        (0..40).map(|i| (i as f64 * 0.2).cos() * 3.0 + 4.0).collect(),
    ]);
    let bars = Dataset::from_values(vec![
        vec![4.0, 7.0, -2.0, 5.0, 3.0],
        vec![2.0, 5.0, 1.0, -3.0, 6.0],
    ]);
    let shares = Dataset::new(vec![
        Series::scalar_value(35.0).with_label("alpha"),
        Series::scalar_value(25.0).with_label("beta"),
        Series::scalar_value(20.0).with_label("gamma"),
        Series::scalar_value(20.0).with_label("delta"),
    ]);
    let points = Dataset::from_values(vec![
        vec![1.0, 3.0, 5.0, 8.0, 11.0],
        vec![2.0, 6.0, 4.0, 9.0, 5.0],
        vec![4.0, 9.0, 6.0, 12.0, 7.0],
    ]);
    let profiles = Dataset::from_values(vec![
        vec![3.0, 5.0, 4.0, 6.0, 5.0, 4.0],
        vec![5.0, 3.0, 6.0, 4.0, 3.0, 6.0],
    ]);
    let readings = Dataset::new(vec![
        Series::scalar_value(0.42).with_label("disk"),
        Series::scalar_value(0.87).with_label("memory"),
        Series::scalar_value(21.0).with_label("temp").with_units("C"),
    ]);

    write(&out_dir, "line.svg", &line(320.0, 200.0, &xy, &opts))?;
    write(&out_dir, "histogram.svg", &histogram(320.0, 200.0, &bars, &opts))?;
    write(&out_dir, "pie.svg", &pie(100.0, &shares, &opts))?;
    write(&out_dir, "donut.svg", &donut(100.0, &shares, &opts))?;
    write(&out_dir, "bubble.svg", &bubble(320.0, 200.0, &points, &opts))?;
    write(&out_dir, "radar.svg", &radar(100.0, &profiles, &opts))?;
    write(&out_dir, "gauge.svg", &gauge(80.0, &readings, &opts))?;
    write(&out_dir, "polar.svg", &polar(100.0, &Dataset::default(), &opts))?;
    write(&out_dir, "map.svg", &map(320.0, 200.0, &Dataset::default(), &opts))?;
    write(&out_dir, "gantt.svg", &gantt(320.0, 200.0, &Dataset::default(), &opts))?;

    Ok(())
}

fn write(dir: &Path, name: &str, root: &Primitive) -> Result<()> {
    let path = dir.join(name);
    inkchart_svg::write_svg(root, &path)?;
    info!("wrote {}", path.display());
    Ok(())
}
