//! The pipeline session.
//!
//! A [`Session`] owns every piece of mutable pipeline state: the tiered
//! memory, the KPI and KOI histories, the last run and the RNG the
//! generators draw from. Each run is one synchronous pass:
//!
//! ```text
//! generate ─▶ normalize ─▶ memory.add ─▶ make_intent ─▶ generate_constraints
//!   ─▶ decide ─▶ execute ─▶ observe KPI ─▶ koi_from ─▶ effect_mapping
//! ```

use anops_back::execute;
use anops_front::{normalize, GeneratorKind, TieredMemory};
use anops_metrics::{effect_mapping, koi_from, BoundedHistory};
use anops_middle::{classify_event, generate_constraints, make_intent};
use anops_optimizer::decide;
use anops_types::{Koi, Kpi, RawInput};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::PipelineResult;
use crate::run::{PipelineRun, RunId};
use crate::stage::PipelineStage;

/// Single-owner pipeline state. Mutate through `&mut self` only.
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    memory: TieredMemory,
    kpi_history: BoundedHistory<Kpi>,
    koi_history: BoundedHistory<Koi>,
    last_run: Option<PipelineRun>,
    stage: PipelineStage,
    runs_completed: u64,
}

impl Session {
    /// Create a session. A configured seed makes generator output reproducible.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            memory: TieredMemory::with_config(config.memory),
            kpi_history: BoundedHistory::new(config.history.capacity),
            koi_history: BoundedHistory::new(config.history.capacity),
            last_run: None,
            stage: PipelineStage::Idle,
            runs_completed: 0,
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    // ── Pipeline ───────────────────────────────────────────────────────

    /// Generate one input with `kind` and run it through the pipeline.
    pub fn run_pipeline(&mut self, kind: GeneratorKind) -> PipelineResult<&PipelineRun> {
        let raw = self.generate(kind);
        self.process(raw, Some(kind))
    }

    /// Like [`run_pipeline`](Self::run_pipeline), selecting the generator by name.
    pub fn run_named(&mut self, name: &str) -> PipelineResult<&PipelineRun> {
        let kind: GeneratorKind = name.parse()?;
        self.run_pipeline(kind)
    }

    /// Run an externally supplied input through the pipeline.
    pub fn run_input(&mut self, raw: RawInput) -> PipelineResult<&PipelineRun> {
        self.process(raw, None)
    }

    /// Draw one input from a generator without running the pipeline.
    pub fn generate(&mut self, kind: GeneratorKind) -> RawInput {
        kind.generator().generate(&mut self.rng, Utc::now())
    }

    fn process(
        &mut self,
        raw: RawInput,
        generator: Option<GeneratorKind>,
    ) -> PipelineResult<&PipelineRun> {
        let previous = self.stage;
        self.stage = PipelineStage::Processing;

        let event = normalize(raw);

        // Strict mode rejects before memory is touched.
        if self.config.strict_categories {
            if let Err(err) = classify_event(&event) {
                self.stage = previous;
                return Err(err.into());
            }
        }

        self.memory.add(event.clone());
        let intent = make_intent(&event, &self.memory);
        let constraints = generate_constraints(&intent);
        let decision = decide(&intent, &constraints);
        let api_calls = execute(&decision);
        let kpi = self.config.kpi.observe(&decision);
        let koi = koi_from(&kpi, &decision);
        let effects = effect_mapping(&decision, &kpi, &koi);

        self.kpi_history.push(kpi);
        self.koi_history.push(koi);

        let run = PipelineRun {
            id: RunId::new(),
            generator,
            standard_event: event,
            intent,
            constraints,
            decision,
            api_calls,
            kpi,
            koi,
            effects,
        };

        self.runs_completed += 1;
        self.stage = PipelineStage::Completed;

        info!(
            run_id = %run.id,
            generator = generator.map(|g| g.name()).unwrap_or("external"),
            slice = %run.decision.slice,
            goal_score = run.koi.operational_goal_score,
            "Pipeline run completed"
        );
        debug!(memory = ?self.memory.stats(), "Memory after run");

        Ok(&*self.last_run.insert(run))
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn memory(&self) -> &TieredMemory {
        &self.memory
    }

    /// KPI snapshots, oldest first.
    pub fn kpi_history(&self) -> &BoundedHistory<Kpi> {
        &self.kpi_history
    }

    /// KOI snapshots, oldest first.
    pub fn koi_history(&self) -> &BoundedHistory<Koi> {
        &self.koi_history
    }

    pub fn last_run(&self) -> Option<&PipelineRun> {
        self.last_run.as_ref()
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_defaults()
    }
}
