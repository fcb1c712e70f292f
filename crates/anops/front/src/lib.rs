//! # anops-front
//!
//! Front stage of the pipeline: where events enter.
//!
//! ```text
//! EventGenerator (×6) ──RawInput──▶ normalize ──StandardEvent──▶ TieredMemory
//!                                                                 hot  (5)
//!                                                                  ↓ oldest
//!                                                                 warm (20)
//!                                                                  ↓ oldest
//!                                                                 cold (unbounded)
//! ```
//!
//! Generators take their random source as an argument, so a seeded
//! `StdRng` replays the same payload sequence.

#![deny(unsafe_code)]

pub mod error;
pub mod generator;
pub mod memory;
pub mod normalizer;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use error::{FrontError, FrontResult};
pub use generator::{default_generators, EventGenerator, GeneratorKind};
pub use memory::{MemoryConfig, MemoryStats, MemoryTier, TieredMemory};
pub use normalizer::normalize;
