//! Intent extraction.

use anops_front::TieredMemory;
use anops_types::{CategoryResult, EventType, Intent, IntentKind, Priority, StandardEvent};
use tracing::{debug, warn};

/// Any source tag containing this marker is treated as high priority.
pub const EMERGENCY_SOURCE_MARKER: &str = "emergency";

/// Payload flag that escalates an event to high priority.
pub const ALERT_FLAG: &str = "alert_triggered";

/// Extract the intent behind an event.
///
/// Unrecognized event types map to [`IntentKind::Unknown`]; use
/// [`classify_event`] first when that fallback should be an error.
pub fn make_intent(event: &StandardEvent, memory: &TieredMemory) -> Intent {
    let kind = event.kind();
    if kind.is_none() {
        warn!(event_type = %event.event_type, "Unrecognized event type, intent falls back to unknown");
    }

    let intent = Intent {
        intent: IntentKind::for_tag(kind),
        priority: priority_of(event),
        context_size: memory.context_size(),
    };

    debug!(
        intent = %intent.intent,
        priority = %intent.priority,
        context_size = intent.context_size,
        "Extracted intent"
    );
    intent
}

/// High if the source is an emergency channel or the payload raised an alert.
pub fn priority_of(event: &StandardEvent) -> Priority {
    if event.source.contains(EMERGENCY_SOURCE_MARKER) || event.flag(ALERT_FLAG) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Strict lookup of the event's type.
pub fn classify_event(event: &StandardEvent) -> CategoryResult<EventType> {
    EventType::parse_tag(&event.event_type)
}
