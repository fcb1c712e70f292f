//! KPI / KOI history

use anops_runtime::{Session, SessionConfig};
use anops_types::{Koi, Kpi};
use serde::Serialize;
use tabled::Tabled;

use super::parse_generator;
use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};

/// Arguments for `anops history`
#[derive(Debug, clap::Args)]
pub struct HistoryArgs {
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

/// Both histories, oldest first
#[derive(Debug, Serialize)]
struct HistoryReport {
    runs_completed: u64,
    kpi: Vec<Kpi>,
    koi: Vec<Koi>,
}

/// Table row for one history slot
#[derive(Debug, Serialize, Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    index: usize,
    latency_ms: f64,
    loss_rate: f64,
    jitter_ms: f64,
    coverage: f64,
    goal: f64,
    cost: f64,
    stability: f64,
}

/// Run the pipeline `count` times and print the bounded histories
pub fn execute(args: HistoryArgs, mut config: SessionConfig, format: OutputFormat) -> CliResult<()> {
    let kind = parse_generator(&args.generator)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = Session::new(config);
    for _ in 0..args.count {
        session.run_pipeline(kind)?;
    }

    let report = HistoryReport {
        runs_completed: session.runs_completed(),
        kpi: session.kpi_history().to_vec(),
        koi: session.koi_history().to_vec(),
    };

    let rows = report
        .kpi
        .iter()
        .zip(&report.koi)
        .enumerate()
        .map(|(index, (kpi, koi))| HistoryRow {
            index: index + 1,
            latency_ms: kpi.latency_ms,
            loss_rate: kpi.loss_rate,
            jitter_ms: kpi.jitter_ms,
            coverage: kpi.coverage,
            goal: koi.operational_goal_score,
            cost: koi.cost_efficiency,
            stability: koi.stability_index,
        })
        .collect();

    print_output::<HistoryRow, _>(rows, &report, format)
}
