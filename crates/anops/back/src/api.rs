//! Control-plane API surface and its simulated implementation.

use anops_types::{ApiCall, Decision, HttpMethod};
use serde_json::json;

pub const NETWORK_SLICE_PATH: &str = "/api/v1/network/slice";
pub const RIS_PATH: &str = "/api/v1/ris/mode";
pub const AI_RAN_PATH: &str = "/api/v1/ai-ran/config";

/// The three reconfiguration endpoints of the network controller.
pub trait ControlPlaneApi {
    /// Allocate or update the network slice.
    fn apply_network(&self, decision: &Decision) -> ApiCall;

    /// Switch the RIS operating mode.
    fn apply_ris(&self, decision: &Decision) -> ApiCall;

    /// Push beamforming and power configuration to the RAN.
    fn apply_ai_ran(&self, decision: &Decision) -> ApiCall;
}

/// Builds call records with canned success responses. Never transmits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedControlPlane;

impl ControlPlaneApi for SimulatedControlPlane {
    fn apply_network(&self, decision: &Decision) -> ApiCall {
        ApiCall {
            method: HttpMethod::Post,
            path: NETWORK_SLICE_PATH.to_string(),
            body: json!({
                "slice_type": decision.slice,
                "qos_class": decision.qos_class,
            }),
            response: json!({ "status": "applied", "slice_id": "slice-123" }),
        }
    }

    fn apply_ris(&self, decision: &Decision) -> ApiCall {
        ApiCall {
            method: HttpMethod::Put,
            path: RIS_PATH.to_string(),
            body: json!({ "mode": decision.ris_mode }),
            response: json!({ "status": "configured", "ris_id": "ris-456" }),
        }
    }

    fn apply_ai_ran(&self, decision: &Decision) -> ApiCall {
        ApiCall {
            method: HttpMethod::Patch,
            path: AI_RAN_PATH.to_string(),
            body: json!({
                "beam_mode": decision.ai_ran_config.beam_mode,
                "power_level": decision.ai_ran_config.power_level,
            }),
            response: json!({ "status": "updated", "config_version": "v2.1" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anops_types::{AiRanConfig, BeamMode, PowerLevel, RisMode, SliceType};

    fn decision() -> Decision {
        Decision {
            slice: SliceType::Embb,
            ris_mode: RisMode::Intelligent,
            ai_ran_config: AiRanConfig {
                beam_mode: BeamMode::Standard,
                power_level: PowerLevel::Medium,
            },
            target_latency: 30,
            qos_class: 5,
        }
    }

    #[test]
    fn network_call_carries_slice_and_qos() {
        let call = SimulatedControlPlane.apply_network(&decision());
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, NETWORK_SLICE_PATH);
        assert_eq!(call.body, json!({"slice_type": "eMBB", "qos_class": 5}));
        assert_eq!(call.response["status"], "applied");
        assert_eq!(call.response["slice_id"], "slice-123");
    }

    #[test]
    fn ris_call_carries_mode() {
        let call = SimulatedControlPlane.apply_ris(&decision());
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.body, json!({"mode": "intelligent"}));
        assert_eq!(call.response["ris_id"], "ris-456");
    }

    #[test]
    fn ai_ran_call_carries_config() {
        let call = SimulatedControlPlane.apply_ai_ran(&decision());
        assert_eq!(call.method, HttpMethod::Patch);
        assert_eq!(call.path, AI_RAN_PATH);
        assert_eq!(
            call.body,
            json!({"beam_mode": "standard", "power_level": "medium"})
        );
        assert_eq!(call.response["config_version"], "v2.1");
    }
}
