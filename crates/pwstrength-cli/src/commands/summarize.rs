//! The `pwstrength summarize` command.

use std::path::PathBuf;

use anyhow::Result;

use pwstrength_core::report::{SessionReport, SessionSummary};

use crate::config::OutputFormat;

pub fn execute(report_path: PathBuf, format: OutputFormat) -> Result<()> {
    let report = SessionReport::load_json(&report_path)?;
    let summary = report.summary();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!(
                "Session {} ({} checks, started {})",
                report.id,
                summary.total,
                report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("{}", summary_table(&summary));
        }
    }

    Ok(())
}

/// Tier and rejection counts as a table.
pub(crate) fn summary_table(summary: &SessionSummary) -> comfy_table::Table {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Strong",
        "Moderate",
        "Weak",
        "Recently used",
        "Empty",
        "Mean score",
    ]);
    table.add_row(vec![
        Cell::new(summary.strong),
        Cell::new(summary.moderate),
        Cell::new(summary.weak),
        Cell::new(summary.rejected_duplicate),
        Cell::new(summary.rejected_empty),
        Cell::new(format!("{:.2}", summary.mean_score)),
    ]);
    table
}
