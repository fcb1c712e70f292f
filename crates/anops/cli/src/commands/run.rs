//! Single pipeline runs

use std::io::Read;

use anops_front::{GeneratorKind, TieredMemory};
use anops_runtime::{PipelineResult, PipelineRun, Session, SessionConfig};
use anops_types::RawInput;
use colored::*;
use serde::Serialize;
use tabled::Tabled;

use super::parse_generator;
use crate::error::CliResult;
use crate::output::{print_info, print_output, OutputFormat};

/// Arguments for `anops run`
#[derive(Debug, clap::Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["generator", "input"])))]
pub struct RunArgs {
    /// Generator name (see `anops generators`)
    #[arg(short, long)]
    pub generator: Option<String>,

    /// RawInput JSON document to run instead of a generator (`-` reads stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Number of passes; only the last run is printed
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// RNG seed, overrides the configured one
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Table row for run summaries
#[derive(Debug, Serialize, Tabled)]
struct SummaryRow {
    stage: &'static str,
    field: &'static str,
    value: String,
}

fn row(stage: &'static str, field: &'static str, value: impl ToString) -> SummaryRow {
    SummaryRow {
        stage,
        field,
        value: value.to_string(),
    }
}

/// Where each pass draws its input from.
enum Source {
    Generator(GeneratorKind),
    Input(RawInput),
}

impl Source {
    fn from_args(args: &RunArgs) -> CliResult<Self> {
        match args.input.as_deref() {
            Some(path) => Ok(Self::Input(read_input(path)?)),
            None => parse_generator(args.generator.as_deref().unwrap_or_default())
                .map(Self::Generator),
        }
    }

    fn run<'s>(&self, session: &'s mut Session) -> PipelineResult<&'s PipelineRun> {
        match self {
            Self::Generator(kind) => session.run_pipeline(*kind),
            Self::Input(raw) => session.run_input(raw.clone()),
        }
    }
}

fn read_input(path: &str) -> CliResult<RawInput> {
    let text = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&text)?)
}

fn summary_rows(run: &PipelineRun, memory: &TieredMemory) -> Vec<SummaryRow> {
    let stats = memory.stats();
    let capacity = memory.config();
    let mut rows = vec![
        row("run", "id", &run.id),
        row(
            "front",
            "generator",
            run.generator.map(|g| g.name()).unwrap_or("external"),
        ),
        row("front", "source", &run.standard_event.source),
        row("front", "type", &run.standard_event.event_type),
        row("front", "timestamp", &run.standard_event.timestamp),
        row(
            "front",
            "hot tier",
            format!("{}/{}", stats.hot, capacity.hot_capacity),
        ),
        row(
            "front",
            "warm tier",
            format!("{}/{}", stats.warm, capacity.warm_capacity),
        ),
        row("front", "cold tier", stats.cold),
        row("middle", "intent", run.intent.intent),
        row("middle", "priority", run.intent.priority),
        row("middle", "context size", run.intent.context_size),
        row(
            "middle",
            "max latency",
            format!("{} ms", run.constraints.max_latency_ms),
        ),
        row("middle", "min reliability", run.constraints.min_reliability),
        row(
            "middle",
            "bandwidth",
            format!("{} Mbps", run.constraints.bandwidth_mbps),
        ),
        row("optimizer", "slice", run.decision.slice),
        row("optimizer", "ris mode", run.decision.ris_mode),
        row("optimizer", "beam mode", run.decision.ai_ran_config.beam_mode),
        row("optimizer", "power level", run.decision.ai_ran_config.power_level),
        row("optimizer", "qos class", run.decision.qos_class),
    ];
    rows.extend(run.api_calls.iter().map(|call| row("back", "api call", call)));
    rows.extend([
        row("metrics", "latency", format!("{} ms", run.kpi.latency_ms)),
        row("metrics", "goal score", run.koi.operational_goal_score),
        row("metrics", "cost efficiency", run.koi.cost_efficiency),
        row("metrics", "stability index", run.koi.stability_index),
    ]);
    rows
}

/// Run the pipeline `count` times and print the last run
pub fn execute(args: RunArgs, mut config: SessionConfig, format: OutputFormat) -> CliResult<()> {
    let source = Source::from_args(&args)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = Session::new(config);
    for _ in 0..args.count {
        source.run(&mut session)?;
    }
    let Some(run) = session.last_run() else {
        return Ok(());
    };

    print_output(summary_rows(run, session.memory()), run, format)?;

    if format == OutputFormat::Table {
        println!();
        for effect in &run.effects {
            println!("{} {}", effect.title.bold(), effect.description.dimmed());
        }
        print_info(&format!(
            "{} run(s) completed, stage {}",
            session.runs_completed(),
            session.stage()
        ));
    }
    Ok(())
}
