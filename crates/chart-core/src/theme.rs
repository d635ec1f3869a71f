// File: crates/chart-core/src/theme.rs
// Summary: Chart chrome colors (background, grid, axis, text).

use skia_safe as skia;

/// Colors for everything that is not a series: background, grid, axis
/// lines, and text. Series colors come from the `Palette`.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_text: skia::Color,
    pub slice_label: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 70, 70, 80),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_text: skia::Color::from_argb(255, 40, 40, 50),
            slice_label: skia::Color::from_argb(255, 25, 25, 35),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
