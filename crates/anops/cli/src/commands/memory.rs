//! Tiered memory inspection

use std::collections::VecDeque;

use anops_front::{MemoryStats, MemoryTier};
use anops_runtime::{Session, SessionConfig};
use anops_types::StandardEvent;
use serde::Serialize;
use tabled::Tabled;

use super::parse_generator;
use crate::error::CliResult;
use crate::output::{print_info, print_output, OutputFormat};

/// Arguments for `anops memory`
#[derive(Debug, clap::Args)]
pub struct MemoryArgs {
    /// Generator name (see `anops generators`)
    #[arg(short, long)]
    pub generator: String,

    /// Number of passes to run before printing
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// RNG seed, overrides the configured one
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Hot and warm contents, cold as a count
#[derive(Debug, Serialize)]
struct MemoryReport<'a> {
    stats: MemoryStats,
    hot: &'a VecDeque<StandardEvent>,
    warm: &'a VecDeque<StandardEvent>,
    cold: usize,
}

/// Table row for one stored event
#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    tier: MemoryTier,
    #[tabled(rename = "#")]
    position: usize,
    source: String,
    #[tabled(rename = "type")]
    event_type: String,
    timestamp: String,
}

fn event_rows(
    tier: MemoryTier,
    events: &VecDeque<StandardEvent>,
) -> impl Iterator<Item = EventRow> + '_ {
    events.iter().enumerate().map(move |(index, event)| EventRow {
        tier,
        position: index + 1,
        source: event.source.clone(),
        event_type: event.event_type.clone(),
        timestamp: event.timestamp.clone(),
    })
}

/// Run the pipeline `count` times and print the memory tiers
pub fn execute(args: MemoryArgs, mut config: SessionConfig, format: OutputFormat) -> CliResult<()> {
    let kind = parse_generator(&args.generator)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = Session::new(config);
    for _ in 0..args.count {
        session.run_pipeline(kind)?;
    }

    let memory = session.memory();
    let report = MemoryReport {
        stats: memory.stats(),
        hot: memory.hot(),
        warm: memory.warm(),
        cold: memory.cold().len(),
    };

    let rows: Vec<EventRow> = event_rows(MemoryTier::Hot, memory.hot())
        .chain(event_rows(MemoryTier::Warm, memory.warm()))
        .collect();
    print_output(rows, &report, format)?;

    if format == OutputFormat::Table {
        print_info(&format!("cold tier holds {} event(s)", report.cold));
    }
    Ok(())
}
