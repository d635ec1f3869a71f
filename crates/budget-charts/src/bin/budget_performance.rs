// File: crates/budget-charts/src/bin/budget_performance.rs
// Summary: Renders the budget-vs-actual grouped bar chart to budget_performance_chart.png.

use anyhow::{Context, Result};
use chart_core::{Axis, ChartSpec, Dataset, Palette, Record, RenderOptions};

fn main() -> Result<()> {
    let data = Dataset::new(vec![
        Record::new("Housing").field("Budgeted", 1600.0).field("Actual", 1500.0),
        Record::new("Food & Dining").field("Budgeted", 400.0).field("Actual", 287.0),
        Record::new("Groceries").field("Budgeted", 300.0).field("Actual", 245.0),
        Record::new("Transportation").field("Budgeted", 200.0).field("Actual", 165.0),
        Record::new("Entertainment").field("Budgeted", 150.0).field("Actual", 98.0),
        Record::new("Utilities").field("Budgeted", 250.0).field("Actual", 225.0),
    ]);

    let palette = Palette::from_hex(&["#1FB8CD", "#FFC185"]).context("build palette")?;

    let spec = ChartSpec::grouped_bar(
        "Budget vs Actual Spending by Category",
        &data,
        &["Budgeted", "Actual"],
        palette,
        "Category",
        // dollar ticks, axis clipped to a fixed upper bound
        Axis::currency("Amount ($)", 0.0, 1800.0),
    )
    .context("build grouped bar chart spec")?;

    let out = "budget_performance_chart.png";
    spec.render_to_png(&RenderOptions::default(), out)
        .with_context(|| format!("write chart to '{out}'"))?;
    println!("Wrote {out}");
    Ok(())
}
