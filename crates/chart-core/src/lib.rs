// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart specs and rendering.

pub mod axis;
pub mod error;
pub mod palette;
pub mod record;
pub mod render;
pub mod series;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, ValueFormat};
pub use error::ChartError;
pub use palette::Palette;
pub use record::{Dataset, Record};
pub use render::RenderOptions;
pub use series::Series;
pub use spec::{ChartKind, ChartSpec, Legend};
pub use text::TextShaper;
pub use theme::Theme;
