//! # anops-runtime
//!
//! Orchestration for the Agentic Network Operations pipeline.
//!
//! A [`Session`] wires the stages together and owns their state; a
//! [`SessionConfig`] sets memory and history sizes, the simulated link
//! profile, the generator seed and strict category handling.
//!
//! ```no_run
//! use anops_front::GeneratorKind;
//! use anops_runtime::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::seeded(42));
//! let run = session.run_pipeline(GeneratorKind::EmergencyTriage).unwrap();
//! println!("{} -> {}", run.intent.intent, run.decision.slice);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod run;
pub mod session;
pub mod stage;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use config::{HistoryConfig, SessionConfig, ENV_PREFIX};
pub use error::{PipelineError, PipelineResult};
pub use run::{PipelineRun, RunId};
pub use session::Session;
pub use stage::PipelineStage;
