// File: crates/budget-charts/src/bin/expense_pie.rs
// Summary: Renders the monthly expense distribution pie chart to monthly_expense_pie_chart.png.

use anyhow::{Context, Result};
use chart_core::{ChartSpec, Dataset, Palette, Record, RenderOptions};

fn main() -> Result<()> {
    // Percentages as published; they sum to 100.1 from upstream rounding and
    // are rendered as given.
    let data = Dataset::new(vec![
        Record::new("Housing").field("amount", 1500.0).field("percentage", 53.2),
        Record::new("Food & Dining").field("amount", 287.0).field("percentage", 10.2),
        Record::new("Groceries").field("amount", 245.0).field("percentage", 8.7),
        Record::new("Transportation").field("amount", 165.0).field("percentage", 5.9),
        Record::new("Entertainment").field("amount", 98.0).field("percentage", 3.5),
        Record::new("Utilities").field("amount", 225.0).field("percentage", 8.0),
        Record::new("Other").field("amount", 300.0).field("percentage", 10.6),
    ]);

    let spec = ChartSpec::pie(
        "Monthly Expense Distribution",
        &data,
        "percentage",
        Palette::brand(),
    )
    .context("build pie chart spec")?;

    let out = "monthly_expense_pie_chart.png";
    spec.render_to_png(&RenderOptions::default(), out)
        .with_context(|| format!("write chart to '{out}'"))?;
    println!("Wrote {out}");
    Ok(())
}
