//! Synthetic event generators, one per simulated telemetry source.
//!
//! Every generator draws its payload from the random source passed in.
//! There is no hidden state between calls.

use std::str::FromStr;

use anops_types::{EventType, Payload, RawInput, SourceKind};
use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::FrontError;

// ── Generator Trait ────────────────────────────────────────────────────

/// Produces synthetic input records for one source.
pub trait EventGenerator {
    /// Which registry entry this generator is.
    fn kind(&self) -> GeneratorKind;

    /// Draw one record stamped with `at`.
    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput;
}

// ── Registry ───────────────────────────────────────────────────────────

/// Registry of the available generators, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    EmergencyTriage,
    WearableVitals,
    EcgAlarm,
    AmbulanceMovement,
    WardCongestion,
    ImagingTransfer,
}

impl GeneratorKind {
    /// All generators in display order.
    pub const ALL: [GeneratorKind; 6] = [
        Self::EmergencyTriage,
        Self::WearableVitals,
        Self::EcgAlarm,
        Self::AmbulanceMovement,
        Self::WardCongestion,
        Self::ImagingTransfer,
    ];

    /// Name used to select the generator from the outside.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmergencyTriage => "emergency-triage",
            Self::WearableVitals => "wearable-vitals",
            Self::EcgAlarm => "ecg-alarm",
            Self::AmbulanceMovement => "ambulance-movement",
            Self::WardCongestion => "ward-congestion",
            Self::ImagingTransfer => "imaging-transfer",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmergencyTriage => "Emergency call / triage text",
            Self::WearableVitals => "Wearable vital sign summary",
            Self::EcgAlarm => "ECG alarm and waveform features",
            Self::AmbulanceMovement => "Ambulance movement and ETA",
            Self::WardCongestion => "Ward / ER congestion",
            Self::ImagingTransfer => "Imaging transfer request",
        }
    }

    /// Source the generator emits as.
    pub fn source(&self) -> SourceKind {
        match self {
            Self::EmergencyTriage => SourceKind::EmergencyCall,
            Self::WearableVitals => SourceKind::WearableDevice,
            Self::EcgAlarm => SourceKind::EcgMonitor,
            Self::AmbulanceMovement => SourceKind::AmbulanceFleet,
            Self::WardCongestion => SourceKind::HospitalOperations,
            Self::ImagingTransfer => SourceKind::ImagingSystem,
        }
    }

    /// Construct the generator.
    pub fn generator(&self) -> Box<dyn EventGenerator> {
        match self {
            Self::EmergencyTriage => Box::new(EmergencyCallGenerator),
            Self::WearableVitals => Box::new(WearableGenerator),
            Self::EcgAlarm => Box::new(EcgAlarmGenerator),
            Self::AmbulanceMovement => Box::new(AmbulanceGenerator),
            Self::WardCongestion => Box::new(FacilityCongestionGenerator),
            Self::ImagingTransfer => Box::new(ImagingRequestGenerator),
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = FrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| FrontError::UnknownGenerator(s.to_string()))
    }
}

/// One instance of every generator, in registry order.
pub fn default_generators() -> Vec<Box<dyn EventGenerator>> {
    GeneratorKind::ALL.iter().map(|k| k.generator()).collect()
}

// ── Helpers ────────────────────────────────────────────────────────────

fn pick<'a>(rng: &mut dyn RngCore, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn into_payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

// ── Emergency Call ─────────────────────────────────────────────────────

const TRIAGE_SCENARIOS: [&str; 4] = [
    "65-year-old male, chest pain with shortness of breath",
    "42-year-old female, traffic accident injury, alert and oriented",
    "3-year-old child, fever 39.2C, suspected seizure",
    "58-year-old male, suspected stroke, one-sided weakness",
];

/// Free-text triage notes from the emergency desk.
pub struct EmergencyCallGenerator;

impl EventGenerator for EmergencyCallGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::EmergencyTriage
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        let text = pick(rng, &TRIAGE_SCENARIOS);
        RawInput::new(
            SourceKind::EmergencyCall,
            EventType::TriageText,
            at,
            into_payload(json!({ "text": text })),
        )
    }
}

// ── Wearable ───────────────────────────────────────────────────────────

/// Heart rate above this raises the wearable alert.
pub const HEART_RATE_ALERT_BPM: i64 = 120;
/// SpO2 below this raises the wearable alert.
pub const SPO2_ALERT_PERCENT: i64 = 92;

/// Vital sign summaries from patient wearables.
pub struct WearableGenerator;

impl EventGenerator for WearableGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::WearableVitals
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        let heart_rate: i64 = rng.gen_range(45..=180);
        let spo2: i64 = rng.gen_range(85..=100);
        let alert = heart_rate > HEART_RATE_ALERT_BPM || spo2 < SPO2_ALERT_PERCENT;
        RawInput::new(
            SourceKind::WearableDevice,
            EventType::VitalSummary,
            at,
            into_payload(json!({
                "heart_rate": heart_rate,
                "spo2": spo2,
                "alert_triggered": alert,
            })),
        )
    }
}

// ── ECG ────────────────────────────────────────────────────────────────

/// ECG feature extracts with an abnormality flag.
pub struct EcgAlarmGenerator;

impl EventGenerator for EcgAlarmGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::EcgAlarm
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        // One in three readings is flagged.
        let abnormal = rng.gen_ratio(1, 3);
        let qt_interval: i64 = rng.gen_range(350..=480);
        let st_deviation = (rng.gen_range(-0.5..=2.0_f64) * 100.0).round() / 100.0;
        RawInput::new(
            SourceKind::EcgMonitor,
            EventType::EcgFeature,
            at,
            into_payload(json!({
                "qt_interval": qt_interval,
                "st_deviation": st_deviation,
                "abnormal_detected": abnormal,
            })),
        )
    }
}

// ── Ambulance ──────────────────────────────────────────────────────────

/// ETA at or below this is treated as high urgency.
pub const AMBULANCE_HIGH_URGENCY_ETA_MIN: i64 = 8;

const DISTRICTS: [&str; 4] = ["Gangnam-gu", "Mapo-gu", "Songpa-gu", "Yongsan-gu"];

/// Ambulance position and ETA updates.
pub struct AmbulanceGenerator;

impl EventGenerator for AmbulanceGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::AmbulanceMovement
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        let eta: i64 = rng.gen_range(3..=25);
        let urgency = if eta <= AMBULANCE_HIGH_URGENCY_ETA_MIN {
            "high"
        } else {
            "medium"
        };
        let vehicle = rng.gen_range(100..=999);
        let district = pick(rng, &DISTRICTS);
        RawInput::new(
            SourceKind::AmbulanceFleet,
            EventType::MobilityStatus,
            at,
            into_payload(json!({
                "vehicle_id": format!("AMB-{}", vehicle),
                "eta_minutes": eta,
                "urgency_level": urgency,
                "location": format!("Seoul {}", district),
            })),
        )
    }
}

// ── Facility Congestion ────────────────────────────────────────────────

const DEPARTMENTS: [&str; 3] = ["emergency_room", "intensive_care_unit", "general_ward"];

/// Ward occupancy and queue length.
pub struct FacilityCongestionGenerator;

impl EventGenerator for FacilityCongestionGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::WardCongestion
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        let occupancy: i64 = rng.gen_range(60..=105);
        let department = pick(rng, &DEPARTMENTS);
        let waiting: i64 = rng.gen_range(0..=45);
        RawInput::new(
            SourceKind::HospitalOperations,
            EventType::FacilityCongestion,
            at,
            into_payload(json!({
                "department": department,
                "occupancy_rate": occupancy,
                "waiting_count": waiting,
            })),
        )
    }
}

// ── Imaging ────────────────────────────────────────────────────────────

const MODALITIES: [&str; 4] = ["CT", "MRI", "X-ray", "ultrasound"];
const IMAGING_PRIORITIES: [&str; 3] = ["stat", "urgent", "routine"];

/// Requests to move imaging studies across the network.
pub struct ImagingRequestGenerator;

impl EventGenerator for ImagingRequestGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::ImagingTransfer
    }

    fn generate(&self, rng: &mut dyn RngCore, at: DateTime<Utc>) -> RawInput {
        let modality = pick(rng, &MODALITIES);
        let priority = pick(rng, &IMAGING_PRIORITIES);
        let size_mb: i64 = rng.gen_range(50..=500);
        RawInput::new(
            SourceKind::ImagingSystem,
            EventType::ImagingRequest,
            at,
            into_payload(json!({
                "modality": modality,
                "priority": priority,
                "estimated_size_mb": size_mb,
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn int(raw: &RawInput, key: &str) -> i64 {
        raw.payload[key].as_i64().expect("integer field")
    }

    #[test]
    fn names_parse_back_to_kinds() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.name().parse::<GeneratorKind>().unwrap(), kind);
        }
        assert_eq!(
            " ECG-Alarm ".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::EcgAlarm
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "lab-results".parse::<GeneratorKind>().unwrap_err();
        assert_eq!(err, FrontError::UnknownGenerator("lab-results".into()));
    }

    #[test]
    fn each_generator_emits_its_source_and_type() {
        let mut rng = StdRng::seed_from_u64(1);
        for generator in default_generators() {
            let raw = generator.generate(&mut rng, Utc::now());
            assert_eq!(raw.source, generator.kind().source().tag());
            assert!(EventType::from_tag(&raw.event_type).is_some());
        }
    }

    #[test]
    fn wearable_alert_matches_thresholds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let raw = WearableGenerator.generate(&mut rng, Utc::now());
            let hr = int(&raw, "heart_rate");
            let spo2 = int(&raw, "spo2");
            assert!((45..=180).contains(&hr));
            assert!((85..=100).contains(&spo2));
            assert_eq!(
                raw.payload["alert_triggered"].as_bool(),
                Some(hr > 120 || spo2 < 92)
            );
        }
    }

    #[test]
    fn ecg_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let raw = EcgAlarmGenerator.generate(&mut rng, Utc::now());
            assert!((350..=480).contains(&int(&raw, "qt_interval")));
            let st = raw.payload["st_deviation"].as_f64().unwrap();
            assert!((-0.5..=2.0).contains(&st));
            assert!((st * 100.0 - (st * 100.0).round()).abs() < 1e-9);
            assert!(raw.payload["abnormal_detected"].is_boolean());
        }
    }

    #[test]
    fn ambulance_urgency_follows_eta() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let raw = AmbulanceGenerator.generate(&mut rng, Utc::now());
            let eta = int(&raw, "eta_minutes");
            assert!((3..=25).contains(&eta));
            let expected = if eta <= 8 { "high" } else { "medium" };
            assert_eq!(raw.payload["urgency_level"], expected);
            assert!(raw.payload["vehicle_id"]
                .as_str()
                .unwrap()
                .starts_with("AMB-"));
        }
    }

    #[test]
    fn congestion_and_imaging_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            let raw = FacilityCongestionGenerator.generate(&mut rng, Utc::now());
            assert!((60..=105).contains(&int(&raw, "occupancy_rate")));
            assert!((0..=45).contains(&int(&raw, "waiting_count")));

            let raw = ImagingRequestGenerator.generate(&mut rng, Utc::now());
            assert!((50..=500).contains(&int(&raw, "estimated_size_mb")));
            let priority = raw.payload["priority"].as_str().unwrap();
            assert!(IMAGING_PRIORITIES.contains(&priority));
            let modality = raw.payload["modality"].as_str().unwrap();
            assert!(MODALITIES.contains(&modality));
        }
    }

    #[test]
    fn same_seed_replays_same_payloads() {
        let at = Utc::now();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for generator in default_generators() {
            for _ in 0..10 {
                assert_eq!(
                    generator.generate(&mut a, at),
                    generator.generate(&mut b, at)
                );
            }
        }
    }
}
