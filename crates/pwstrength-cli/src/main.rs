//! pwstrength CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pwstrength_core::Tier;

mod commands;
mod config;

use config::OutputFormat;

/// Which session report files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Json,
    Html,
    All,
}

#[derive(Parser)]
#[command(name = "pwstrength", version, about = "Password strength checker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single password (reads one line from stdin if omitted)
    Check {
        /// Password to check
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,

        /// Output format (defaults to the config's default_format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Exit code 1 unless the password reaches this tier
        #[arg(long)]
        require: Option<Tier>,
    },

    /// Check one password per stdin line, rejecting recent repeats
    Session {
        /// Output format (defaults to the config's default_format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Directory to save the session report in
        #[arg(long)]
        output: Option<PathBuf>,

        /// Session report format; implies saving a report
        #[arg(long, value_enum)]
        report: Option<ReportFormat>,
    },

    /// List the strong password criteria
    Criteria,

    /// Summarize a saved session report
    Summarize {
        /// Session report JSON
        #[arg(long)]
        report: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            password,
            format,
            require,
        } => commands::check::execute(password, format, require, cli.config),
        Commands::Session {
            format,
            output,
            report,
        } => commands::session::execute(format, output, report, cli.config),
        Commands::Criteria => commands::criteria::execute(),
        Commands::Summarize { report, format } => commands::summarize::execute(report, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
