//! Constraint generation: priority selects one of two fixed bundles.

use anops_types::{Constraints, Intent, Priority};

/// Bundle for high-priority intents.
pub const HIGH_PRIORITY: Constraints = Constraints {
    max_latency_ms: 30,
    min_reliability: 0.9999,
    bandwidth_mbps: 100,
    penalty_weight: 10.0,
};

/// Bundle for everything else.
pub const MEDIUM_PRIORITY: Constraints = Constraints {
    max_latency_ms: 100,
    min_reliability: 0.99,
    bandwidth_mbps: 50,
    penalty_weight: 5.0,
};

/// Constraints for an intent. Only the priority is consulted.
pub fn generate_constraints(intent: &Intent) -> Constraints {
    constraints_for(intent.priority)
}

pub fn constraints_for(priority: Priority) -> Constraints {
    match priority {
        Priority::High => HIGH_PRIORITY,
        Priority::Medium => MEDIUM_PRIORITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anops_types::IntentKind;

    fn intent(kind: IntentKind, priority: Priority, context_size: usize) -> Intent {
        Intent {
            intent: kind,
            priority,
            context_size,
        }
    }

    #[test]
    fn high_priority_bundle() {
        let c = generate_constraints(&intent(IntentKind::EmergencyResponse, Priority::High, 0));
        assert_eq!(c.max_latency_ms, 30);
        assert!((c.min_reliability - 0.9999).abs() < f64::EPSILON);
        assert_eq!(c.bandwidth_mbps, 100);
        assert!((c.penalty_weight - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn medium_priority_bundle() {
        let c = generate_constraints(&intent(IntentKind::PatientMonitoring, Priority::Medium, 0));
        assert_eq!(c, MEDIUM_PRIORITY);
        assert_eq!(c.max_latency_ms, 100);
        assert_eq!(c.bandwidth_mbps, 50);
    }

    #[test]
    fn intent_label_and_context_are_ignored() {
        let a = generate_constraints(&intent(IntentKind::Unknown, Priority::High, 0));
        let b = generate_constraints(&intent(IntentKind::CardiacAlert, Priority::High, 24));
        assert_eq!(a, b);
    }
}
