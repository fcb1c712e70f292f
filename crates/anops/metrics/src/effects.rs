//! Effect explanations for the applied configuration. Presentation only.

use anops_types::{Decision, Effect, Koi, Kpi};

/// Three fixed-template explanations: slice, RIS mode, AI-RAN beam mode.
///
/// `kpi` and `koi` are accepted so callers can pass the full snapshot;
/// the templates currently only draw on the decision.
pub fn effect_mapping(decision: &Decision, _kpi: &Kpi, _koi: &Koi) -> Vec<Effect> {
    vec![
        Effect {
            title: format!("Slice {} applied", decision.slice),
            description: format!(
                "Dedicated slice allocated to meet the {}ms target latency",
                decision.target_latency
            ),
        },
        Effect {
            title: format!("RIS {} mode", decision.ris_mode),
            description: "Reconfigurable intelligent surface improves coverage and suppresses interference"
                .to_string(),
        },
        Effect {
            title: "AI-RAN optimization".to_string(),
            description: format!(
                "Beamforming mode {} maximizes spectral efficiency",
                decision.ai_ran_config.beam_mode
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anops_types::{AiRanConfig, BeamMode, PowerLevel, RisMode, SliceType};

    #[test]
    fn templates_mention_decision_fields() {
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
        let kpi = Kpi {
            latency_ms: 30.0,
            loss_rate: 0.001,
            jitter_ms: 2.5,
            coverage: 0.98,
        };
        let koi = Koi {
            operational_goal_score: 0.874,
            cost_efficiency: 0.9,
            stability_index: 0.979,
        };

        let effects = effect_mapping(&decision, &kpi, &koi);
        assert_eq!(effects.len(), 3);
        assert_eq!(effects[0].title, "Slice URLLC applied");
        assert!(effects[0].description.contains("30ms"));
        assert_eq!(effects[1].title, "RIS intelligent mode");
        assert_eq!(effects[2].title, "AI-RAN optimization");
        assert!(effects[2].description.contains("adaptive"));
    }
}
