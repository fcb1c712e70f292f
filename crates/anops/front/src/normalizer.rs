use anops_types::{RawInput, StandardEvent};

/// Convert a generator record into the standard event shape.
///
/// Total and field-for-field: source, type, timestamp and payload are
/// carried over unchanged.
pub fn normalize(raw: RawInput) -> StandardEvent {
    StandardEvent {
        source: raw.source,
        event_type: raw.event_type,
        timestamp: raw.timestamp,
        payload: raw.payload,
    }
}
