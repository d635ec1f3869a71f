// File: crates/chart-core/src/axis.rs
// Summary: Value-axis model with title, explicit range, and tick formatting.

/// How value-axis ticks are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Bare number, no decimals.
    Plain,
    /// Dollar prefix, thousands separators, zero decimals ("$1,500").
    Currency,
}

/// Value axis with an explicit, caller-supplied range. Nothing is inferred
/// from the data; [min, max] comes straight from the chart author.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub format: ValueFormat,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min, max, format: ValueFormat::Plain }
    }

    pub fn currency(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min, max, format: ValueFormat::Currency }
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Format a tick value per this axis' rule.
    pub fn format_value(&self, value: f64) -> String {
        match self.format {
            ValueFormat::Plain => format!("{}", value.round() as i64),
            ValueFormat::Currency => format!("${}", group_thousands(value.round() as i64)),
        }
    }
}

fn group_thousands(mut value: i64) -> String {
    let negative = value < 0;
    value = value.abs();
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}
