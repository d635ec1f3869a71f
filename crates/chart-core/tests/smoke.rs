// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs for each kind.

use chart_core::{Axis, ChartSpec, Dataset, Palette, Record, RenderOptions};

fn tiny_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("Jan").field("a", 1.0).field("b", 2.0),
        Record::new("Feb").field("a", 2.5).field("b", 1.5),
        Record::new("Mar").field("a", 1.8).field("b", 3.0),
    ])
}

fn out_path(name: &str) -> std::path::PathBuf {
    let out = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    out
}

fn assert_png(path: &std::path::Path) {
    let meta = std::fs::metadata(path).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    let bytes = std::fs::read(path).expect("read output");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_line_png() {
    let spec = ChartSpec::line(
        "smoke line",
        &tiny_dataset(),
        &["a", "b"],
        Palette::brand(),
        "Month",
        Axis::new("Amount", 0.0, 4.0),
    )
    .expect("line spec");

    let out = out_path("smoke_line.png");
    spec.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    assert_png(&out);

    // Also verify the in-memory API works
    let bytes = spec.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn render_smoke_grouped_bar_png() {
    let spec = ChartSpec::grouped_bar(
        "smoke bars",
        &tiny_dataset(),
        &["a", "b"],
        Palette::brand(),
        "Month",
        Axis::currency("Amount ($)", 0.0, 4.0),
    )
    .expect("bar spec");

    let out = out_path("smoke_bars.png");
    spec.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    assert_png(&out);
}

#[test]
fn render_smoke_pie_png() {
    let spec = ChartSpec::pie("smoke pie", &tiny_dataset(), "a", Palette::brand())
        .expect("pie spec");

    let out = out_path("smoke_pie.png");
    spec.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    assert_png(&out);
}

#[test]
fn render_overwrites_existing_file() {
    let out = out_path("smoke_overwrite.png");
    std::fs::write(&out, b"stale").unwrap();

    let spec = ChartSpec::pie("overwrite", &tiny_dataset(), "a", Palette::brand())
        .expect("pie spec");
    spec.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "stale bytes replaced");
}
