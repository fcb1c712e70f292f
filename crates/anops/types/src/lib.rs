//! # anops-types
//!
//! Shared data model for the Agentic Network Operations pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! RawInput ──normalize──▶ StandardEvent ──▶ Intent ──▶ Constraints
//!                                                         │
//!          Koi ◀── Kpi ◀── Vec<ApiCall> ◀── Decision ◀────┘
//! ```
//!
//! | Stage | Types |
//! |-------|-------|
//! | Front | [`RawInput`], [`StandardEvent`], [`EventType`], [`SourceKind`] |
//! | Middle | [`Intent`], [`IntentKind`], [`Priority`], [`Constraints`] |
//! | Optimizer | [`Decision`], [`SliceType`], [`RisMode`], [`AiRanConfig`] |
//! | Back | [`ApiCall`], [`HttpMethod`] |
//! | Metrics | [`Kpi`], [`Koi`], [`Effect`] |
//!
//! Lookup tables between these enumerations always carry an explicit
//! fallback arm (`IntentKind::Unknown`), so a miss is visible in the code
//! instead of hidden behind a map default.

#![deny(unsafe_code)]

pub mod api;
pub mod decision;
pub mod error;
pub mod event;
pub mod intent;
pub mod metrics;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use api::{ApiCall, HttpMethod};
pub use decision::{AiRanConfig, BeamMode, Decision, PowerLevel, RisMode, SliceType};
pub use error::{CategoryError, CategoryResult};
pub use event::{EventType, Payload, RawInput, SourceKind, StandardEvent};
pub use intent::{Constraints, Intent, IntentKind, Priority};
pub use metrics::{Effect, Koi, Kpi};
