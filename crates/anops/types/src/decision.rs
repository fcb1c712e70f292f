//! Optimizer output: which network resources to reconfigure and how.

use serde::{Deserialize, Serialize};

/// Simulated network slice class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceType {
    /// Ultra-reliable low-latency communication.
    #[serde(rename = "URLLC")]
    Urllc,
    /// Enhanced mobile broadband.
    #[serde(rename = "eMBB")]
    Embb,
    /// Massive machine-type communication.
    #[serde(rename = "mMTC")]
    Mmtc,
}

impl SliceType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urllc => "URLLC",
            Self::Embb => "eMBB",
            Self::Mmtc => "mMTC",
        }
    }
}

impl std::fmt::Display for SliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reconfigurable intelligent surface operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RisMode {
    Intelligent,
    Default,
}

impl RisMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intelligent => "intelligent",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for RisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// AI-RAN beamforming mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeamMode {
    Adaptive,
    Standard,
}

impl std::fmt::Display for BeamMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adaptive => write!(f, "adaptive"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// AI-RAN transmit power level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerLevel {
    High,
    Medium,
}

impl std::fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Radio access network configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRanConfig {
    pub beam_mode: BeamMode,
    pub power_level: PowerLevel,
}

/// A complete optimizer decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub slice: SliceType,
    pub ris_mode: RisMode,
    pub ai_ran_config: AiRanConfig,
    /// Echo of the constraint's `max_latency_ms`.
    pub target_latency: u32,
    pub qos_class: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_serializes_with_mixed_case_labels() {
        for slice in [SliceType::Urllc, SliceType::Embb, SliceType::Mmtc] {
            let json = serde_json::to_string(&slice).unwrap();
            assert_eq!(json, format!("\"{}\"", slice.label()));
            let back: SliceType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slice);
        }
    }

    #[test]
    fn decision_wire_shape() {
        let decision = Decision {
            slice: SliceType::Urllc,
            ris_mode: RisMode::Intelligent,
            ai_ran_config: AiRanConfig {
                beam_mode: BeamMode::Adaptive,
                power_level: PowerLevel::High,
            },
            target_latency: 30,
            qos_class: 1,
        };
        let value = serde_json::to_value(&decision).unwrap();
        assert_eq!(value["slice"], "URLLC");
        assert_eq!(value["ris_mode"], "intelligent");
        assert_eq!(value["ai_ran_config"]["beam_mode"], "adaptive");
        assert_eq!(value["ai_ran_config"]["power_level"], "high");
        assert_eq!(value["target_latency"], 30);
    }
}
