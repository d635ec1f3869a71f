// File: crates/chart-core/src/record.rs
// Summary: Fixed-shape tabular records and the ordered dataset built from them.

use crate::error::ChartError;
use crate::series::Series;

/// One row: a category-or-time label plus named numeric fields.
/// Field order is insertion order; records are never mutated after build.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    fields: Vec<(String, f64)>,
}

impl Record {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), fields: Vec::new() }
    }

    /// Append a named numeric field (builder-style).
    pub fn field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

/// Ordered sequence of records with an identical field set. Insertion order
/// is authoritative: projections and rendering never sort.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Record labels in input order.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// Project one field across all records into a named series.
    /// The series is named after the field and has one point per record.
    pub fn project(&self, field: &str) -> Result<Series, ChartError> {
        let mut points = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let value = record.get(field).ok_or_else(|| {
                ChartError::config(format!(
                    "field '{}' missing from record '{}'",
                    field, record.label
                ))
            })?;
            points.push((record.label.clone(), value));
        }
        Ok(Series::new(field, points))
    }
}
