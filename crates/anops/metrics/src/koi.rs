//! KOI scoring.
//!
//! - operational goal score = 0.4·(1 − latency/100) + 0.3·(1 − loss) + 0.3·coverage
//! - cost efficiency = 0.9 on URLLC, 0.7 otherwise
//! - stability index = coverage·(1 − loss)
//!
//! Scores are rounded to three decimals.

use anops_types::{Decision, Koi, Kpi, SliceType};
use tracing::debug;

const LATENCY_WEIGHT: f64 = 0.4;
const LOSS_WEIGHT: f64 = 0.3;
const COVERAGE_WEIGHT: f64 = 0.3;
/// Latency that scores zero on the latency component.
const LATENCY_SCALE_MS: f64 = 100.0;

pub const COST_EFFICIENCY_URLLC: f64 = 0.9;
pub const COST_EFFICIENCY_DEFAULT: f64 = 0.7;

/// Round half away from zero to three decimals.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Derive outcome scores from a KPI snapshot and the decision behind it.
pub fn koi_from(kpi: &Kpi, decision: &Decision) -> Koi {
    let goal = (1.0 - kpi.latency_ms / LATENCY_SCALE_MS) * LATENCY_WEIGHT
        + (1.0 - kpi.loss_rate) * LOSS_WEIGHT
        + kpi.coverage * COVERAGE_WEIGHT;

    let cost_efficiency = match decision.slice {
        SliceType::Urllc => COST_EFFICIENCY_URLLC,
        SliceType::Embb | SliceType::Mmtc => COST_EFFICIENCY_DEFAULT,
    };

    let stability = kpi.coverage * (1.0 - kpi.loss_rate);

    let koi = Koi {
        operational_goal_score: round3(goal),
        cost_efficiency: round3(cost_efficiency),
        stability_index: round3(stability),
    };
    debug!(
        goal = koi.operational_goal_score,
        cost = koi.cost_efficiency,
        stability = koi.stability_index,
        "Scored KOI"
    );
    koi
}
