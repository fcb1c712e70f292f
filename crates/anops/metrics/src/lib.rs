//! # anops-metrics
//!
//! Closes the loop after execution:
//!
//! ```text
//! Decision ──KpiProfile::observe──▶ Kpi ──koi_from──▶ Koi
//!     └──────────────effect_mapping──────────────▶ Vec<Effect>
//! ```
//!
//! Loss, jitter and coverage are constants of the simulation
//! ([`KpiProfile`]); latency follows the decision's target. KPI and KOI
//! snapshots are kept in a [`BoundedHistory`].

#![deny(unsafe_code)]

pub mod effects;
pub mod history;
pub mod koi;
pub mod kpi;

pub use effects::effect_mapping;
pub use history::{BoundedHistory, DEFAULT_HISTORY_CAPACITY};
pub use koi::{koi_from, round3, COST_EFFICIENCY_DEFAULT, COST_EFFICIENCY_URLLC};
pub use kpi::KpiProfile;
