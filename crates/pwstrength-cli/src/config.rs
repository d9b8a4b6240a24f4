//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest and largest accepted meter width.
const METER_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 4..=80;

/// Output format for per-submission results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration problems that are not plain I/O or TOML errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// An environment override could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Top-level pwstrength configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PwstrengthConfig {
    /// Pause before showing a verdict, in milliseconds.
    #[serde(default)]
    pub analysis_delay_ms: u64,
    /// Width of the terminal strength meter in characters.
    #[serde(default = "default_meter_width")]
    pub meter_width: usize,
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Where session reports go when `--output` is not given.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_meter_width() -> usize {
    20
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("./pwstrength-reports")
}

impl Default for PwstrengthConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 0,
            meter_width: default_meter_width(),
            default_format: OutputFormat::default(),
            report_dir: default_report_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `pwstrength.toml` in the current directory
/// 2. `~/.config/pwstrength/config.toml`
///
/// Environment variable overrides: `PWSTRENGTH_ANALYSIS_DELAY_MS`,
/// `PWSTRENGTH_REPORT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<PwstrengthConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            return Err(ConfigError::NotFound(p.to_path_buf()).into());
        }
    } else {
        let local = PathBuf::from("pwstrength.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<PwstrengthConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => PwstrengthConfig::default(),
    };

    let config = apply_overrides(config, |var| std::env::var(var).ok())?;
    Ok(normalize(config))
}

/// Apply environment overrides using `lookup` to read variables.
fn apply_overrides(
    mut config: PwstrengthConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PwstrengthConfig, ConfigError> {
    const DELAY_VAR: &str = "PWSTRENGTH_ANALYSIS_DELAY_MS";
    const REPORT_DIR_VAR: &str = "PWSTRENGTH_REPORT_DIR";

    if let Some(value) = lookup(DELAY_VAR) {
        config.analysis_delay_ms =
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    var: DELAY_VAR,
                    value: value.clone(),
                })?;
    }

    if let Some(value) = lookup(REPORT_DIR_VAR) {
        if value.is_empty() {
            return Err(ConfigError::InvalidEnv {
                var: REPORT_DIR_VAR,
                value,
            });
        }
        config.report_dir = PathBuf::from(value);
    }

    Ok(config)
}

fn normalize(mut config: PwstrengthConfig) -> PwstrengthConfig {
    let clamped = config
        .meter_width
        .clamp(*METER_WIDTH_RANGE.start(), *METER_WIDTH_RANGE.end());
    if clamped != config.meter_width {
        tracing::warn!(
            requested = config.meter_width,
            used = clamped,
            "meter_width out of range"
        );
        config.meter_width = clamped;
    }
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pwstrength"))
}
