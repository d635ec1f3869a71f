// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, paddings, plot rect).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot rectangle for a surface of the given size. The top inset leaves
    /// room for the title row and the above-plot legend.
    pub const fn plot_rect(&self, width: i32, height: i32) -> RectI32 {
        RectI32::from_ltrb(
            self.left as i32,
            self.top as i32,
            width - self.right as i32,
            height - self.bottom as i32,
        )
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 32, 96, 64)
    }
}

/// Integer pixel rectangle used for plot-area math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 * 0.5 }
}
