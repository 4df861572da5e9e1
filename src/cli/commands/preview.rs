use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use common::format_currency_in;
use compute::OverviewSnapshot;
use model::{validate, DashboardDataset, MetricFormat};
use tracing::{trace, warn};

use crate::dataset::load_dataset;

pub fn preview(dataset_path: Option<&Path>, currency: &str) -> Result<()> {
    trace!("Entering preview function");

    let dataset = load_dataset(dataset_path)?;
    let report = validate(&dataset);
    if !report.is_valid() {
        warn!("Previewing a dataset with {} error(s)", report.errors().count());
    }

    print!("{}", render_preview(&dataset, currency));
    Ok(())
}

/// Text rendering of the settled overview page.
pub fn render_preview(dataset: &DashboardDataset, currency: &str) -> String {
    let snapshot = OverviewSnapshot::build(dataset);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Key metrics");
    for (metric, view) in dataset.kpis.iter().zip(&snapshot.kpis) {
        let value = match metric.format {
            MetricFormat::Currency => format_currency_in(metric.value, currency),
            _ => view.value_text.clone(),
        };
        let _ = writeln!(out, "  {:<20} {:>14}  {}", view.label, value, view.change_text);
    }

    let _ = writeln!(out, "\nRevenue trend");
    for (name, value) in snapshot.revenue.categories.iter().zip(&snapshot.revenue.values) {
        let _ = writeln!(out, "  {:<8} {:>14}", name, format_currency_in(*value, currency));
    }

    let _ = writeln!(out, "\nUser growth");
    for (name, value) in snapshot.users.categories.iter().zip(&snapshot.users.values) {
        let _ = writeln!(out, "  {:<8} {:>14}", name, common::format_number(*value));
    }

    let _ = writeln!(out, "\nCategory distribution (total {})", snapshot.categories.center_label());
    for slice in &snapshot.categories.slices {
        let label = if slice.show_label { "" } else { "  (no label)" };
        let _ = writeln!(out, "  {:<16} {:>7}{}", slice.name, slice.percentage_text(), label);
    }

    let _ = writeln!(out, "\nRecent activity");
    for row in &snapshot.activity {
        let _ = writeln!(
            out,
            "  {:<7} {:<24} {:<14} {:>8}  {}",
            row.date, row.activity, row.user, row.value.text, row.status.label
        );
    }
    out
}
