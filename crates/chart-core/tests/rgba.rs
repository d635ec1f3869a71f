// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, ChartSpec, Dataset, Palette, Record, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let data = Dataset::new(vec![
        Record::new("A").field("v", 0.0),
        Record::new("B").field("v", 2.0),
        Record::new("C").field("v", 4.0),
    ]);
    let spec = ChartSpec::line(
        "rgba",
        &data,
        &["v"],
        Palette::brand(),
        "X",
        Axis::new("Y", 0.0, 4.0),
    )
    .expect("line spec");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = spec.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is the white theme background, fully opaque (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
