// File: crates/chart-core/src/render.rs
// Summary: Headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::spec::{ChartKind, ChartSpec};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, RectI32, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable all text (title, ticks, legend, slice labels) for
    /// deterministic pixel comparisons across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl ChartSpec {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster
    /// surface, overwriting any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render and return the PNG bytes without touching the filesystem.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::export("PNG encode failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::export("reading surface pixels failed"));
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
        if opts.width <= opts.insets.hsum() as i32 || opts.height <= opts.insets.vsum() as i32 {
            return Err(ChartError::config("surface smaller than its insets"));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::export("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let shaper = TextShaper::new();

        canvas.clear(opts.theme.background);
        let plot = opts.insets.plot_rect(opts.width, opts.height);

        if opts.draw_labels {
            shaper.draw_centered(
                canvas,
                &self.title,
                opts.width as f32 * 0.5,
                38.0,
                20.0,
                opts.theme.title,
            );
            draw_legend(canvas, &shaper, self, &opts.theme, &plot);
        }

        match self.kind {
            ChartKind::Line | ChartKind::GroupedBar => {
                let axis = self.y_axis.as_ref().ok_or_else(|| {
                    ChartError::config("line/bar chart missing its value axis")
                })?;
                draw_grid(canvas, &opts.theme, &plot, self, axis);
                draw_axis_lines(canvas, &opts.theme, &plot);
                if opts.draw_labels {
                    draw_axis_labels(canvas, &shaper, &opts.theme, &plot, self, axis);
                }
                match self.kind {
                    ChartKind::Line => draw_line_series(canvas, self, axis, &plot),
                    _ => draw_bar_series(canvas, self, axis, &plot),
                }
            }
            ChartKind::Pie => {
                draw_pie(canvas, &shaper, self, opts, &plot)?;
            }
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Number of horizontal tick rows (and gridlines) on the value axis.
const VALUE_TICKS: usize = 7;

fn category_center(plot: &RectI32, index: usize, count: usize) -> f32 {
    let slot = plot.width() as f32 / count.max(1) as f32;
    plot.left as f32 + (index as f32 + 0.5) * slot
}

fn value_to_y(plot: &RectI32, axis: &Axis, value: f64) -> f32 {
    let frac = (value - axis.min) / axis.span();
    plot.bottom as f32 - frac as f32 * plot.height() as f32
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32, spec: &ChartSpec, axis: &Axis) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals at value ticks
    for v in linspace(axis.min, axis.max, VALUE_TICKS) {
        let y = value_to_y(plot, axis, v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
    // verticals at category centers (line charts only; bar groups carry
    // enough structure on their own)
    if spec.kind == ChartKind::Line {
        let categories = spec.categories();
        for i in 0..categories.len() {
            let x = category_center(plot, i, categories.len());
            canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
        }
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &RectI32,
    spec: &ChartSpec,
    axis: &Axis,
) {
    // value ticks, right-aligned against the axis
    for v in linspace(axis.min, axis.max, VALUE_TICKS) {
        let y = value_to_y(plot, axis, v);
        shaper.draw_right(canvas, &axis.format_value(v), plot.left as f32 - 10.0, y + 5.0, 13.0, theme.axis_label);
    }

    // category labels under their slots
    let categories = spec.categories();
    for (i, label) in categories.iter().enumerate() {
        let x = category_center(plot, i, categories.len());
        shaper.draw_centered(canvas, label, x, plot.bottom as f32 + 20.0, 13.0, theme.axis_label);
    }

    // axis titles
    shaper.draw_centered(
        canvas,
        &spec.x_title,
        plot.center_x(),
        plot.bottom as f32 + 46.0,
        14.0,
        theme.axis_label,
    );
    shaper.draw_left(canvas, &axis.title, 10.0, plot.top as f32 + 6.0, 14.0, theme.axis_label);
}

/// Horizontal legend, centered, just above the plot area.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    spec: &ChartSpec,
    theme: &Theme,
    plot: &RectI32,
) {
    if !spec.legend.visible {
        return;
    }
    // Pie legends list slice labels; multi-series charts list series names.
    let entries: Vec<String> = match spec.kind {
        ChartKind::Pie => spec.categories().iter().map(|s| s.to_string()).collect(),
        _ => spec.series.iter().map(|s| s.name.clone()).collect(),
    };
    if entries.is_empty() {
        return;
    }

    const SWATCH: f32 = 12.0;
    const TEXT_GAP: f32 = 6.0;
    const ENTRY_GAP: f32 = 18.0;
    const TEXT_SIZE: f32 = 13.0;

    let widths: Vec<f32> = entries
        .iter()
        .map(|e| SWATCH + TEXT_GAP + shaper.measure_width(e, TEXT_SIZE))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + ENTRY_GAP * (entries.len() - 1) as f32;

    let mut x = plot.center_x() - total * 0.5;
    let y = plot.top as f32 - 18.0;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, entry) in entries.iter().enumerate() {
        // palette length was validated at build time
        if let Some(color) = spec.palette.color(i) {
            fill.set_color(color);
        }
        let swatch = skia::Rect::from_ltrb(x, y - SWATCH + 2.0, x + SWATCH, y + 2.0);
        canvas.draw_rect(swatch, &fill);
        shaper.draw_left(canvas, entry, x + SWATCH + TEXT_GAP, y, TEXT_SIZE, theme.legend_text);
        x += widths[i] + ENTRY_GAP;
    }
}

fn draw_line_series(canvas: &skia::Canvas, spec: &ChartSpec, axis: &Axis, plot: &RectI32) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(3.0);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);

    for (i, series) in spec.series.iter().enumerate() {
        let color = spec.palette.color(i).unwrap_or(skia::Color::BLACK);
        stroke.set_color(color);
        marker.set_color(color);

        let n = series.len();
        let mut path = skia::Path::new();
        for (j, value) in series.values().enumerate() {
            let x = category_center(plot, j, n);
            let y = value_to_y(plot, axis, value);
            if j == 0 {
                path.move_to((x, y));
            } else {
                path.line_to((x, y));
            }
        }
        if n > 1 {
            canvas.draw_path(&path, &stroke);
        }
        for (j, value) in series.values().enumerate() {
            let x = category_center(plot, j, n);
            let y = value_to_y(plot, axis, value);
            canvas.draw_circle((x, y), 5.0, &marker);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, spec: &ChartSpec, axis: &Axis, plot: &RectI32) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let groups = spec.categories().len();
    if groups == 0 {
        return;
    }
    let k = spec.series.len() as f32;
    let slot = plot.width() as f32 / groups as f32;
    let group_w = slot * 0.7;
    let bar_w = group_w / k;
    let base_y = value_to_y(plot, axis, axis.min);

    for (i, series) in spec.series.iter().enumerate() {
        if let Some(color) = spec.palette.color(i) {
            fill.set_color(color);
        }
        for (j, value) in series.values().enumerate() {
            let cx = category_center(plot, j, groups);
            let x0 = cx - group_w * 0.5 + i as f32 * bar_w;
            // clip into the explicit axis range rather than overflowing the plot
            let y = value_to_y(plot, axis, value.clamp(axis.min, axis.max));
            let rect = skia::Rect::from_ltrb(x0 + 1.0, y.min(base_y), x0 + bar_w - 1.0, base_y);
            canvas.draw_rect(rect, &fill);
        }
    }
}

fn draw_pie(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    spec: &ChartSpec,
    opts: &RenderOptions,
    plot: &RectI32,
) -> Result<(), ChartError> {
    let slices = spec
        .series
        .first()
        .ok_or_else(|| ChartError::config("pie chart has no slice series"))?;
    let total = slices.total();
    if total <= 0.0 {
        return Err(ChartError::config("pie slice values must sum to a positive total"));
    }

    let cx = plot.center_x();
    let cy = plot.center_y();
    let radius = (plot.width().min(plot.height()) as f32) * 0.42;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(2.0);
    border.set_color(opts.theme.background);

    // Slices start at 12 o'clock and sweep clockwise; geometry uses the
    // value's share of the supplied total, label text shows the literal value.
    let mut start = -90.0f32;
    for (i, (label, value)) in slices.points.iter().enumerate() {
        let sweep = (value / total) as f32 * 360.0;
        if let Some(color) = spec.palette.color(i) {
            fill.set_color(color);
        }
        canvas.draw_arc(oval, start, sweep, true, &fill);
        canvas.draw_arc(oval, start, sweep, true, &border);

        if opts.draw_labels {
            let mid = (start + sweep * 0.5).to_radians();
            let lx = cx + mid.cos() * radius * 0.62;
            let ly = cy + mid.sin() * radius * 0.62;
            let text = format!("{} {:.1}%", label, value);
            shaper.draw_centered(canvas, &text, lx, ly, 14.0, opts.theme.slice_label);
        }
        start += sweep;
    }
    Ok(())
}
