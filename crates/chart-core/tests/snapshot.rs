// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, one golden per chart kind.
// Behavior:
// - Renders a deterministic small chart to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Axis, ChartSpec, Dataset, Palette, Record, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/__snapshots__")
        .join(name)
}

fn deterministic_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("Q1").field("plan", 3.0).field("spent", 2.0),
        Record::new("Q2").field("plan", 3.0).field("spent", 3.4),
        Record::new("Q3").field("plan", 3.5).field("spent", 2.8),
        Record::new("Q4").field("plan", 3.5).field("spent", 3.1),
    ])
}

#[test]
fn golden_line_chart() {
    let spec = ChartSpec::line(
        "golden line",
        &sample_dataset(),
        &["plan", "spent"],
        Palette::brand(),
        "Quarter",
        Axis::new("Amount", 0.0, 4.0),
    )
    .expect("line spec");
    let bytes = spec.render_to_png_bytes(&deterministic_opts()).expect("render bytes");
    write_or_compare(&snapshot_path("line.png"), &bytes);
}

#[test]
fn golden_grouped_bar_chart() {
    let spec = ChartSpec::grouped_bar(
        "golden bars",
        &sample_dataset(),
        &["plan", "spent"],
        Palette::brand(),
        "Quarter",
        Axis::currency("Amount ($)", 0.0, 4.0),
    )
    .expect("bar spec");
    let bytes = spec.render_to_png_bytes(&deterministic_opts()).expect("render bytes");
    write_or_compare(&snapshot_path("grouped_bar.png"), &bytes);
}

#[test]
fn golden_pie_chart() {
    let spec = ChartSpec::pie("golden pie", &sample_dataset(), "spent", Palette::brand())
        .expect("pie spec");
    let bytes = spec.render_to_png_bytes(&deterministic_opts()).expect("render bytes");
    write_or_compare(&snapshot_path("pie.png"), &bytes);
}
