use anyhow::{Context, Result};
use case_footprint::app::engine::AuditEngine;
use case_footprint::cli;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "casetool",
    about = "Audit an eligibility questionnaire: enumerate every completion and merge them into cases",
    version
)]
struct Cli {
    /// Questionnaire file (.yaml, .yml or .json)
    schema: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print node and link counts of the linked questionnaire
    Summary,
    /// List every root-to-terminal answer sequence
    Paths {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute the deduplicated cases
    Cases {
        /// Rejection handling: "trim" drops rejected paths, "collapse" keeps one per rejection answer
        #[arg(long, default_value = "trim")]
        mode: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Report structural findings; exits non-zero when any are found
    Check,
    /// Dump the linked graph as JSON
    DebugGraph,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level/filter '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

fn run(args: Cli) -> Result<ExitCode> {
    let engine = AuditEngine::load_from_path(&args.schema)?;

    match args.command {
        Command::Summary => cli::display_summary(&engine)?,
        Command::Paths { json } => cli::display_paths(&engine, json)?,
        Command::Cases { mode, json } => cli::display_cases(&engine, &mode, json)?,
        Command::Check => {
            if !cli::display_check(&engine)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::DebugGraph => cli::debug_graph(&engine)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_logging(&args.log_level)?;
    run(args)
}
