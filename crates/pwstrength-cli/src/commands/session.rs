//! The `pwstrength session` command.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};

use pwstrength_core::report::SessionReport;
use pwstrength_core::Session;
use pwstrength_report::html::write_html_report;
use pwstrength_report::{json, text};

use super::{analysis_pause, trim_line_ending};
use crate::config::{load_config_from, OutputFormat, PwstrengthConfig};
use crate::ReportFormat;

pub fn execute(
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    report_format: Option<ReportFormat>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);

    if format == OutputFormat::Text {
        println!("{}", text::render_criteria());
    }

    let stdin = std::io::stdin();
    let report = run(&mut stdin.lock(), format, &config)?;

    eprintln!(
        "\n{}",
        super::summarize::summary_table(&report.summary())
    );

    if output.is_some() || report_format.is_some() {
        let dir = output.unwrap_or_else(|| config.report_dir.clone());
        save_report(&report, &dir, report_format.unwrap_or(ReportFormat::Json))?;
    }

    Ok(())
}

/// Feed every line of `input` through one session and return its report.
fn run(
    input: &mut impl BufRead,
    format: OutputFormat,
    config: &PwstrengthConfig,
) -> Result<SessionReport> {
    let mut session = Session::new();
    let mut line = String::new();

    loop {
        line.clear();
        if input
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            break;
        }
        let candidate = trim_line_ending(&line);

        let outcome = session.submit(candidate);

        match format {
            OutputFormat::Json => println!("{}", json::to_json_line(&outcome)?),
            OutputFormat::Text => match &outcome {
                Ok(assessment) => {
                    analysis_pause(config);
                    println!(
                        "{}",
                        text::render_assessment(assessment, config.meter_width)
                    );
                }
                Err(rejection) => println!("{}\n", text::render_rejection(rejection)),
            },
        }
    }

    Ok(session.finish())
}

fn save_report(report: &SessionReport, dir: &std::path::Path, format: ReportFormat) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory {}", dir.display()))?;
    let timestamp = report.finished_at.format("%Y-%m-%dT%H%M%S");

    if matches!(format, ReportFormat::Json | ReportFormat::All) {
        let path = dir.join(format!("session-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Session report saved to: {}", path.display());
    }
    if matches!(format, ReportFormat::Html | ReportFormat::All) {
        let path = dir.join(format!("session-{timestamp}.html"));
        write_html_report(report, &path)?;
        eprintln!("HTML report: {}", path.display());
    }

    Ok(())
}
