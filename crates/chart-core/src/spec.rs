// File: crates/chart-core/src/spec.rs
// Summary: Declarative chart specification and per-kind builders.

use crate::axis::Axis;
use crate::error::ChartError;
use crate::palette::Palette;
use crate::record::Dataset;
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    GroupedBar,
    Pie,
}

/// Legend is always horizontal, centered, just above the plot area; only
/// visibility is configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legend {
    pub visible: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Complete declarative description of one chart, independent of the
/// rendering backend. Building the same spec from the same inputs yields
/// an equal value; nothing here depends on runtime state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// One projected series per requested field (line, grouped bar), or a
    /// single label+value slice series (pie). Order is caller order.
    pub series: Vec<Series>,
    /// Colors assigned positionally: i-th color to i-th series/slice.
    pub palette: Palette,
    /// Category axis title; empty for pie charts.
    pub x_title: String,
    /// Value axis with explicit range; `None` for pie charts.
    pub y_axis: Option<Axis>,
    pub legend: Legend,
}

impl ChartSpec {
    /// Line chart: one series per field, in caller order, categories on X.
    pub fn line(
        title: impl Into<String>,
        data: &Dataset,
        fields: &[&str],
        palette: Palette,
        x_title: impl Into<String>,
        y_axis: Axis,
    ) -> Result<Self, ChartError> {
        let series = project_fields(data, fields, &palette)?;
        Ok(Self {
            kind: ChartKind::Line,
            title: title.into(),
            series,
            palette,
            x_title: x_title.into(),
            y_axis: Some(y_axis),
            legend: Legend::default(),
        })
    }

    /// Grouped bar chart: side-by-side bars per category, one per field.
    pub fn grouped_bar(
        title: impl Into<String>,
        data: &Dataset,
        fields: &[&str],
        palette: Palette,
        x_title: impl Into<String>,
        y_axis: Axis,
    ) -> Result<Self, ChartError> {
        let series = project_fields(data, fields, &palette)?;
        Ok(Self {
            kind: ChartKind::GroupedBar,
            title: title.into(),
            series,
            palette,
            x_title: x_title.into(),
            y_axis: Some(y_axis),
            legend: Legend::default(),
        })
    }

    /// Pie chart: record labels become slice labels, `value_field` supplies
    /// slice values. Values are rendered as given; they are never
    /// renormalized, even when they do not sum to 100.
    pub fn pie(
        title: impl Into<String>,
        data: &Dataset,
        value_field: &str,
        palette: Palette,
    ) -> Result<Self, ChartError> {
        if data.is_empty() {
            return Err(ChartError::config("dataset has no records"));
        }
        palette.check_fits(data.len())?;
        let slices = data.project(value_field)?;
        Ok(Self {
            kind: ChartKind::Pie,
            title: title.into(),
            series: vec![slices],
            palette,
            x_title: String::new(),
            y_axis: None,
            legend: Legend::default(),
        })
    }

    /// Category labels in input order, taken from the first series.
    pub fn categories(&self) -> Vec<&str> {
        self.series
            .first()
            .map(|s| s.labels().collect())
            .unwrap_or_default()
    }
}

fn project_fields(
    data: &Dataset,
    fields: &[&str],
    palette: &Palette,
) -> Result<Vec<Series>, ChartError> {
    if data.is_empty() {
        return Err(ChartError::config("dataset has no records"));
    }
    if fields.is_empty() {
        return Err(ChartError::config("no fields selected to plot"));
    }
    palette.check_fits(fields.len())?;
    fields.iter().map(|f| data.project(f)).collect()
}
