use anops_types::{ApiCall, Decision, RisMode};
use tracing::debug;

use crate::api::{ControlPlaneApi, SimulatedControlPlane};

/// Execute a decision against the simulated control plane.
pub fn execute(decision: &Decision) -> Vec<ApiCall> {
    execute_with(&SimulatedControlPlane, decision)
}

/// Execute a decision against any control-plane implementation.
///
/// Order: network, then RIS if the mode is not `default`, then AI-RAN.
pub fn execute_with(api: &dyn ControlPlaneApi, decision: &Decision) -> Vec<ApiCall> {
    let mut calls = Vec::with_capacity(3);

    calls.push(api.apply_network(decision));
    if decision.ris_mode != RisMode::Default {
        calls.push(api.apply_ris(decision));
    }
    calls.push(api.apply_ai_ran(decision));

    for call in &calls {
        debug!(method = %call.method, path = %call.path, "Simulated API call");
    }
    calls
}
