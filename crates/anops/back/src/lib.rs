//! # anops-back
//!
//! Back stage of the pipeline. A [`Decision`](anops_types::Decision) is
//! applied through a [`ControlPlaneApi`]; the only implementation,
//! [`SimulatedControlPlane`], builds the request record and a canned
//! success response without sending anything.
//!
//! Call order is fixed: network slice, RIS (only when the RIS mode is not
//! `default`), AI-RAN.

#![deny(unsafe_code)]

pub mod api;
pub mod executor;

pub use api::{ControlPlaneApi, SimulatedControlPlane, AI_RAN_PATH, NETWORK_SLICE_PATH, RIS_PATH};
pub use executor::{execute, execute_with};
