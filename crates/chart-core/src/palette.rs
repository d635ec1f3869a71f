// File: crates/chart-core/src/palette.rs
// Summary: Fixed ordered color palette with positional series assignment.

use skia_safe as skia;

use crate::error::ChartError;

/// An ordered sequence of colors assigned positionally: the i-th series or
/// slice always gets the i-th color. Assignment past the end is a
/// configuration error, never a silent wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<skia::Color>,
}

impl Palette {
    pub fn new(colors: Vec<skia::Color>) -> Self {
        Self { colors }
    }

    /// Seven-color brand palette used by the budget charts.
    pub fn brand() -> Self {
        Self::new(vec![
            skia::Color::from_argb(255, 0x1F, 0xB8, 0xCD), // teal
            skia::Color::from_argb(255, 0xFF, 0xC1, 0x85), // orange
            skia::Color::from_argb(255, 0xEC, 0xEB, 0xD5), // cream
            skia::Color::from_argb(255, 0x5D, 0x87, 0x8F), // slate
            skia::Color::from_argb(255, 0xD2, 0xBA, 0x4C), // gold
            skia::Color::from_argb(255, 0xB4, 0x41, 0x3C), // brick
            skia::Color::from_argb(255, 0x96, 0x43, 0x25), // brown
        ])
    }

    /// Build a palette from `#RRGGBB` hex codes, in order.
    pub fn from_hex(codes: &[&str]) -> Result<Self, ChartError> {
        let mut colors = Vec::with_capacity(codes.len());
        for code in codes {
            colors.push(parse_hex(code)?);
        }
        Ok(Self::new(colors))
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn color(&self, index: usize) -> Option<skia::Color> {
        self.colors.get(index).copied()
    }

    /// Validate that `count` series fit this palette.
    pub fn check_fits(&self, count: usize) -> Result<(), ChartError> {
        if count > self.colors.len() {
            return Err(ChartError::config(format!(
                "{} series requested but palette holds only {} colors",
                count,
                self.colors.len()
            )));
        }
        Ok(())
    }
}

fn parse_hex(code: &str) -> Result<skia::Color, ChartError> {
    let hex = code.strip_prefix('#').unwrap_or(code);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ChartError::config(format!("invalid hex color '{}'", code)));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ChartError::config(format!("invalid hex color '{}'", code)))?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ChartError::config(format!("invalid hex color '{}'", code)))?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ChartError::config(format!("invalid hex color '{}'", code)))?;
    Ok(skia::Color::from_argb(255, r, g, b))
}
