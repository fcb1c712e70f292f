//! Middle-stage outputs: intents and the constraint bundles they select.

use serde::{Deserialize, Serialize};

use crate::event::EventType;

// ── Intent Kind ────────────────────────────────────────────────────────

/// Coarse operational intent behind an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    EmergencyResponse,
    PatientMonitoring,
    CardiacAlert,
    AmbulanceCoordination,
    ResourceOptimization,
    DiagnosticSupport,
    /// The event type was outside the lookup table.
    Unknown,
}

impl IntentKind {
    /// Intent for a recognized event type.
    pub fn for_event_type(event_type: EventType) -> Self {
        match event_type {
            EventType::TriageText => Self::EmergencyResponse,
            EventType::VitalSummary => Self::PatientMonitoring,
            EventType::EcgFeature => Self::CardiacAlert,
            EventType::MobilityStatus => Self::AmbulanceCoordination,
            EventType::FacilityCongestion => Self::ResourceOptimization,
            EventType::ImagingRequest => Self::DiagnosticSupport,
        }
    }

    /// Intent for an optional event type; `None` maps to [`IntentKind::Unknown`].
    pub fn for_tag(event_type: Option<EventType>) -> Self {
        match event_type {
            Some(t) => Self::for_event_type(t),
            None => Self::Unknown,
        }
    }

    /// Snake-case label used on the wire and in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyResponse => "emergency_response",
            Self::PatientMonitoring => "patient_monitoring",
            Self::CardiacAlert => "cardiac_alert",
            Self::AmbulanceCoordination => "ambulance_coordination",
            Self::ResourceOptimization => "resource_optimization",
            Self::DiagnosticSupport => "diagnostic_support",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Priority ───────────────────────────────────────────────────────────

/// Handling priority of an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Intent extracted from one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub intent: IntentKind,
    pub priority: Priority,
    /// Hot + warm memory size at extraction time.
    pub context_size: usize,
}

/// Network constraint bundle selected by priority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub max_latency_ms: u32,
    pub min_reliability: f64,
    pub bandwidth_mbps: u32,
    pub penalty_weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_type_has_a_known_intent() {
        for t in EventType::ALL {
            assert_ne!(IntentKind::for_event_type(t), IntentKind::Unknown);
        }
        assert_eq!(IntentKind::for_tag(None), IntentKind::Unknown);
    }

    #[test]
    fn intent_serializes_snake_case() {
        let intent = Intent {
            intent: IntentKind::AmbulanceCoordination,
            priority: Priority::High,
            context_size: 3,
        };
        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(value["intent"], "ambulance_coordination");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["context_size"], 3);
    }

    #[test]
    fn label_matches_serde_name() {
        let json = serde_json::to_string(&IntentKind::DiagnosticSupport).unwrap();
        assert_eq!(json, format!("\"{}\"", IntentKind::DiagnosticSupport.label()));
    }
}
