// File: crates/budget-charts/src/bin/spending_trends.rs
// Summary: Renders the six-month spending trend line chart to spending_trends.png.

use anyhow::{Context, Result};
use chart_core::{Axis, ChartSpec, Dataset, Palette, Record, RenderOptions};

fn main() -> Result<()> {
    let data = Dataset::new(vec![
        Record::new("January")
            .field("Housing", 1500.0)
            .field("Food & Dining", 320.0)
            .field("Transportation", 180.0)
            .field("Entertainment", 95.0),
        Record::new("February")
            .field("Housing", 1500.0)
            .field("Food & Dining", 285.0)
            .field("Transportation", 165.0)
            .field("Entertainment", 110.0),
        Record::new("March")
            .field("Housing", 1500.0)
            .field("Food & Dining", 345.0)
            .field("Transportation", 195.0)
            .field("Entertainment", 125.0),
        Record::new("April")
            .field("Housing", 1500.0)
            .field("Food & Dining", 310.0)
            .field("Transportation", 175.0)
            .field("Entertainment", 85.0),
        Record::new("May")
            .field("Housing", 1500.0)
            .field("Food & Dining", 290.0)
            .field("Transportation", 205.0)
            .field("Entertainment", 140.0),
        Record::new("June")
            .field("Housing", 1500.0)
            .field("Food & Dining", 287.0)
            .field("Transportation", 165.0)
            .field("Entertainment", 98.0),
    ]);

    // Brand colors in series order
    let palette = Palette::from_hex(&["#1FB8CD", "#FFC185", "#5D878F", "#D2BA4C"])
        .context("build palette")?;

    let spec = ChartSpec::line(
        "Monthly Spending Trends by Category",
        &data,
        &["Housing", "Food & Dining", "Transportation", "Entertainment"],
        palette,
        "Month",
        Axis::new("Amount ($)", 0.0, 4000.0),
    )
    .context("build line chart spec")?;

    let out = "spending_trends.png";
    spec.render_to_png(&RenderOptions::default(), out)
        .with_context(|| format!("write chart to '{out}'"))?;
    println!("Wrote {out}");
    Ok(())
}
