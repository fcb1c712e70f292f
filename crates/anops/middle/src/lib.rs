//! # anops-middle
//!
//! Middle stage: reads a standard event (plus the size of the tiered
//! memory context) and turns it into an [`Intent`](anops_types::Intent),
//! then selects the [`Constraints`](anops_types::Constraints) bundle for
//! that intent's priority.
//!
//! Memory is only read here; the front stage owns all mutation.

#![deny(unsafe_code)]

pub mod constraints;
pub mod intent;

pub use constraints::{constraints_for, generate_constraints, HIGH_PRIORITY, MEDIUM_PRIORITY};
pub use intent::{classify_event, make_intent, priority_of};
