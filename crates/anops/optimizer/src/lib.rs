//! # anops-optimizer
//!
//! Final decision stage. Maps an intent and its constraint bundle to a
//! network slice, RIS mode, AI-RAN configuration and QoS class through
//! fixed rule tables.
//!
//! | Intent | Slice |
//! |--------|-------|
//! | emergency_response, cardiac_alert, ambulance_coordination | URLLC |
//! | patient_monitoring, diagnostic_support | eMBB |
//! | resource_optimization | mMTC |
//! | unknown | eMBB |
//!
//! RIS runs `intelligent` whenever the latency ceiling is under
//! [`RIS_LATENCY_THRESHOLD_MS`]. URLLC gets adaptive beams at high power
//! and QoS class 1; every other slice gets standard/medium and class 5.

#![deny(unsafe_code)]

use anops_types::{
    AiRanConfig, BeamMode, Constraints, Decision, Intent, IntentKind, PowerLevel, RisMode,
    SliceType,
};
use tracing::debug;

/// Latency ceilings strictly below this switch RIS to intelligent mode.
pub const RIS_LATENCY_THRESHOLD_MS: u32 = 50;

/// QoS class for URLLC traffic.
pub const QOS_CLASS_URLLC: u8 = 1;
/// QoS class for everything else.
pub const QOS_CLASS_DEFAULT: u8 = 5;

/// Decide the network configuration for an intent.
///
/// Pure: identical inputs always give an identical decision.
pub fn decide(intent: &Intent, constraints: &Constraints) -> Decision {
    let slice = slice_for(intent.intent);
    let decision = Decision {
        slice,
        ris_mode: ris_mode_for(constraints.max_latency_ms),
        ai_ran_config: ai_ran_for(slice),
        target_latency: constraints.max_latency_ms,
        qos_class: qos_class_for(slice),
    };

    debug!(
        intent = %intent.intent,
        slice = %decision.slice,
        ris_mode = %decision.ris_mode,
        qos_class = decision.qos_class,
        "Optimizer decision"
    );
    decision
}

/// Slice table.
pub fn slice_for(intent: IntentKind) -> SliceType {
    match intent {
        IntentKind::EmergencyResponse
        | IntentKind::CardiacAlert
        | IntentKind::AmbulanceCoordination => SliceType::Urllc,
        IntentKind::PatientMonitoring | IntentKind::DiagnosticSupport => SliceType::Embb,
        IntentKind::ResourceOptimization => SliceType::Mmtc,
        IntentKind::Unknown => SliceType::Embb,
    }
}

pub fn ris_mode_for(max_latency_ms: u32) -> RisMode {
    if max_latency_ms < RIS_LATENCY_THRESHOLD_MS {
        RisMode::Intelligent
    } else {
        RisMode::Default
    }
}

pub fn ai_ran_for(slice: SliceType) -> AiRanConfig {
    match slice {
        SliceType::Urllc => AiRanConfig {
            beam_mode: BeamMode::Adaptive,
            power_level: PowerLevel::High,
        },
        SliceType::Embb | SliceType::Mmtc => AiRanConfig {
            beam_mode: BeamMode::Standard,
            power_level: PowerLevel::Medium,
        },
    }
}

pub fn qos_class_for(slice: SliceType) -> u8 {
    match slice {
        SliceType::Urllc => QOS_CLASS_URLLC,
        SliceType::Embb | SliceType::Mmtc => QOS_CLASS_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anops_types::Priority;
    use proptest::prelude::*;

    fn intent(kind: IntentKind) -> Intent {
        Intent {
            intent: kind,
            priority: Priority::Medium,
            context_size: 0,
        }
    }

    fn constraints(max_latency_ms: u32) -> Constraints {
        Constraints {
            max_latency_ms,
            min_reliability: 0.99,
            bandwidth_mbps: 50,
            penalty_weight: 5.0,
        }
    }

    #[test]
    fn emergency_response_under_tight_latency() {
        let d = decide(&intent(IntentKind::EmergencyResponse), &constraints(30));
        assert_eq!(d.slice, SliceType::Urllc);
        assert_eq!(d.ris_mode, RisMode::Intelligent);
        assert_eq!(d.qos_class, 1);
        assert_eq!(d.ai_ran_config.beam_mode, BeamMode::Adaptive);
        assert_eq!(d.ai_ran_config.power_level, PowerLevel::High);
        assert_eq!(d.target_latency, 30);
    }

    #[test]
    fn resource_optimization_under_relaxed_latency() {
        let d = decide(&intent(IntentKind::ResourceOptimization), &constraints(100));
        assert_eq!(d.slice, SliceType::Mmtc);
        assert_eq!(d.ris_mode, RisMode::Default);
        assert_eq!(d.qos_class, 5);
        assert_eq!(d.ai_ran_config.beam_mode, BeamMode::Standard);
        assert_eq!(d.ai_ran_config.power_level, PowerLevel::Medium);
        assert_eq!(d.target_latency, 100);
    }

    #[test]
    fn slice_table_is_complete() {
        assert_eq!(slice_for(IntentKind::CardiacAlert), SliceType::Urllc);
        assert_eq!(slice_for(IntentKind::AmbulanceCoordination), SliceType::Urllc);
        assert_eq!(slice_for(IntentKind::PatientMonitoring), SliceType::Embb);
        assert_eq!(slice_for(IntentKind::DiagnosticSupport), SliceType::Embb);
        assert_eq!(slice_for(IntentKind::Unknown), SliceType::Embb);
    }

    #[test]
    fn ris_threshold_is_strict() {
        assert_eq!(ris_mode_for(49), RisMode::Intelligent);
        assert_eq!(ris_mode_for(50), RisMode::Default);
    }

    #[test]
    fn urllc_with_relaxed_latency_keeps_default_ris() {
        // Slice and RIS are decided independently.
        let d = decide(&intent(IntentKind::CardiacAlert), &constraints(100));
        assert_eq!(d.slice, SliceType::Urllc);
        assert_eq!(d.ris_mode, RisMode::Default);
    }

    fn any_intent_kind() -> impl Strategy<Value = IntentKind> {
        prop_oneof![
            Just(IntentKind::EmergencyResponse),
            Just(IntentKind::PatientMonitoring),
            Just(IntentKind::CardiacAlert),
            Just(IntentKind::AmbulanceCoordination),
            Just(IntentKind::ResourceOptimization),
            Just(IntentKind::DiagnosticSupport),
            Just(IntentKind::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn decide_is_pure(kind in any_intent_kind(), latency in 0u32..500) {
            let i = intent(kind);
            let c = constraints(latency);
            prop_assert_eq!(decide(&i, &c), decide(&i, &c));
        }

        #[test]
        fn qos_and_beam_follow_slice(kind in any_intent_kind(), latency in 0u32..500) {
            let d = decide(&intent(kind), &constraints(latency));
            let urllc = d.slice == SliceType::Urllc;
            prop_assert_eq!(d.qos_class == 1, urllc);
            prop_assert_eq!(d.ai_ran_config.beam_mode == BeamMode::Adaptive, urllc);
            prop_assert_eq!(d.target_latency, latency);
        }
    }
}
