//! anops - command-line driver for the Agentic Network Operations pipeline
//!
//! Runs synthetic healthcare telemetry through the full control loop:
//! - Generate and normalize an event, age it through tiered memory
//! - Extract intent and constraints, decide a network configuration
//! - Apply it through the simulated control plane
//! - Report KPI / KOI and their bounded history

use std::process::ExitCode;

use anops_runtime::SessionConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{generators, history, memory, run};
use error::CliResult;
use output::{print_error, print_single};

/// anops CLI application
#[derive(Parser)]
#[command(name = "anops")]
#[command(about = "Agentic Network Operations - network-as-managed-resource pipeline", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path or basename (TOML, YAML or JSON)
    #[arg(short, long, env = "ANOPS_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Reject unrecognized event types instead of falling back
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and print the last run
    Run(run::RunArgs),

    /// Run the pipeline and print the KPI / KOI history
    History(history::HistoryArgs),

    /// Run the pipeline and print the tiered memory
    Memory(memory::MemoryArgs),

    /// List available generators
    Generators,

    /// Show the effective configuration
    Config,
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter.into());

    // Logs go to stderr so structured output on stdout stays parseable.
    let (plain, json) = if json {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
    } else {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(plain)
        .with(json)
        .init();
}

fn load_config(cli: &Cli) -> CliResult<SessionConfig> {
    let mut config = SessionConfig::load(cli.config.as_deref())?;
    if cli.strict {
        config.strict_categories = true;
    }
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

fn dispatch(cli: Cli) -> CliResult<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Run(args) => run::execute(args, config, cli.output),
        Commands::History(args) => history::execute(args, config, cli.output),
        Commands::Memory(args) => memory::execute(args, config, cli.output),
        Commands::Generators => generators::execute(cli.output),
        Commands::Config => print_single(&config, cli.output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
