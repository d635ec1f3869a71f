// File: crates/chart-core/src/series.rs
// Summary: Named (label, value) series model for category charts.

/// One visual trace: a name plus an ordered sequence of (label, value)
/// pairs. Labels keep dataset insertion order; length equals the record
/// count of the dataset the series was projected from.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(String, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(String, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Values in point order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    /// Labels in point order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(l, _)| l.as_str())
    }

    /// Sum of all values (pie slice geometry).
    pub fn total(&self) -> f64 {
        self.values().sum()
    }
}
