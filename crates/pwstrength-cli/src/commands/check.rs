//! The `pwstrength check` command.

use std::path::PathBuf;

use anyhow::Result;

use pwstrength_core::{evaluate, Rejection, Tier};
use pwstrength_report::{json, text};

use super::{analysis_pause, read_candidate};
use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    password: Option<String>,
    format: Option<OutputFormat>,
    require: Option<Tier>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);

    let candidate = match password {
        Some(p) => p,
        None => read_candidate(&mut std::io::stdin().lock())?,
    };

    if candidate.is_empty() {
        let rejection = Rejection::Empty;
        match format {
            OutputFormat::Json => println!("{}", json::to_json_line(&Err(rejection))?),
            OutputFormat::Text => eprintln!("{}", text::render_rejection(&rejection)),
        }
        std::process::exit(1);
    }

    if format == OutputFormat::Text {
        analysis_pause(&config);
    }
    let assessment = evaluate(&candidate);

    match format {
        OutputFormat::Json => println!("{}", json::to_json_line(&Ok(assessment.clone()))?),
        OutputFormat::Text => print!(
            "{}",
            text::render_assessment(&assessment, config.meter_width)
        ),
    }

    if let Some(required) = require {
        if assessment.tier() < required {
            eprintln!(
                "Password is {}, {} required.",
                assessment.tier(),
                required
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
