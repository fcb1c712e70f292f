//! Input records and their normalized form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CategoryError, CategoryResult};

/// Free-form event payload (a JSON object).
pub type Payload = serde_json::Map<String, serde_json::Value>;

// ── Source Kind ────────────────────────────────────────────────────────

/// Simulated telemetry sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Emergency call / triage desk.
    EmergencyCall,
    /// Patient-worn vital sign monitor.
    WearableDevice,
    /// Bedside ECG monitor.
    EcgMonitor,
    /// Ambulance fleet telematics.
    AmbulanceFleet,
    /// Hospital bed and ward management.
    HospitalOperations,
    /// Radiology / PACS.
    ImagingSystem,
}

impl SourceKind {
    /// All sources in registry order.
    pub const ALL: [SourceKind; 6] = [
        Self::EmergencyCall,
        Self::WearableDevice,
        Self::EcgMonitor,
        Self::AmbulanceFleet,
        Self::HospitalOperations,
        Self::ImagingSystem,
    ];

    /// Wire tag carried in [`RawInput::source`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EmergencyCall => "emergency_call",
            Self::WearableDevice => "wearable_device",
            Self::EcgMonitor => "ecg_monitor",
            Self::AmbulanceFleet => "ambulance_fleet",
            Self::HospitalOperations => "hospital_operations",
            Self::ImagingSystem => "imaging_system",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ── Event Type ─────────────────────────────────────────────────────────

/// The six event types the middle stage knows how to interpret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    TriageText,
    VitalSummary,
    EcgFeature,
    MobilityStatus,
    FacilityCongestion,
    ImagingRequest,
}

impl EventType {
    /// All known event types.
    pub const ALL: [EventType; 6] = [
        Self::TriageText,
        Self::VitalSummary,
        Self::EcgFeature,
        Self::MobilityStatus,
        Self::FacilityCongestion,
        Self::ImagingRequest,
    ];

    /// Wire tag carried in [`RawInput::event_type`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TriageText => "triage_text",
            Self::VitalSummary => "vital_summary",
            Self::EcgFeature => "ecg_feature",
            Self::MobilityStatus => "mobility_status",
            Self::FacilityCongestion => "facility_congestion",
            Self::ImagingRequest => "imaging_request",
        }
    }

    /// Look up a wire tag. `None` for anything outside the table.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Like [`from_tag`](Self::from_tag), but reports a miss as an error.
    pub fn parse_tag(tag: &str) -> CategoryResult<Self> {
        Self::from_tag(tag).ok_or_else(|| CategoryError::unrecognized("event type", tag))
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ── Records ────────────────────────────────────────────────────────────

/// A record as emitted by a generator.
///
/// Consumed by normalization and not retained afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Source tag (see [`SourceKind::tag`]).
    pub source: String,
    /// Event type tag (see [`EventType::tag`]).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Emission time as ISO-8601 text. Kept verbatim: naive and offset
    /// forms pass through unchanged.
    pub timestamp: String,
    pub payload: Payload,
}

impl RawInput {
    /// Build a record for a known source and event type, stamped in RFC 3339.
    pub fn new(
        source: SourceKind,
        event_type: EventType,
        timestamp: DateTime<Utc>,
        payload: Payload,
    ) -> Self {
        Self {
            source: source.tag().to_string(),
            event_type: event_type.tag().to_string(),
            timestamp: timestamp.to_rfc3339(),
            payload,
        }
    }
}

/// The normalized event shape stored in tiered memory. Never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardEvent {
    pub source: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: String,
    pub payload: Payload,
}

impl StandardEvent {
    /// Typed event type, if the tag is one of the known six.
    pub fn kind(&self) -> Option<EventType> {
        EventType::from_tag(&self.event_type)
    }

    /// Boolean payload flag; absent or non-boolean values read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.payload
            .get(key)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}
