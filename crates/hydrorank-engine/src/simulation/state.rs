//! Mutable simulation state and the per-tick transition
//!
//! All mutation is confined to [`SimulationState::apply_tick`]; the rest
//! of the system only sees immutable snapshots taken after the
//! transition completes, so no partially updated tick is ever observable.

use chrono::{DateTime, Utc};
use hydrorank_core::{
    RecommendationEvent, Sample, SamplePoint, ScoredMethod, SimPhase, SimulationSnapshot,
    TreatmentMethod,
};
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::scoring;
use crate::selection::RecommendationTracker;

/// What a tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Sample scored and recorded, clock advanced
    Advanced,
    /// Scoring failed; nothing recorded, clock still advanced
    Skipped,
    /// Terminal bound reached (now or earlier); no further ticks
    Stopped,
}

/// The single mutable holder of simulation state
pub struct SimulationState {
    phase: SimPhase,
    elapsed_secs: u64,
    current_sample: Sample,
    scored_methods: Vec<ScoredMethod>,
    tracker: RecommendationTracker,
    leader: Option<(TreatmentMethod, u64)>,
    sample_history: Vec<SamplePoint>,
    recommendation_history: Vec<RecommendationEvent>,
    started_at: DateTime<Utc>,
    time_step_secs: u64,
    terminal_bound_secs: u64,
}

impl SimulationState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            phase: SimPhase::Running,
            elapsed_secs: 0,
            current_sample: Sample::default(),
            scored_methods: Vec::new(),
            tracker: RecommendationTracker::new(),
            leader: None,
            sample_history: Vec::new(),
            recommendation_history: Vec::new(),
            started_at: Utc::now(),
            time_step_secs: config.time_step_secs,
            terminal_bound_secs: config.terminal_bound_secs,
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Run one tick transition with the given sample
    ///
    /// Order per tick: bound check, score, select, record both history
    /// entries at the pre-advance elapsed time, advance the clock.
    pub fn apply_tick(&mut self, sample: Sample) -> TickOutcome {
        if self.phase == SimPhase::Stopped {
            return TickOutcome::Stopped;
        }
        if self.elapsed_secs >= self.terminal_bound_secs {
            self.phase = SimPhase::Stopped;
            info!(
                elapsed_secs = self.elapsed_secs,
                ticks = self.sample_history.len(),
                "terminal bound reached, simulation stopped"
            );
            return TickOutcome::Stopped;
        }

        let scored = match scoring::score_checked(&sample) {
            Ok(scored) => scored,
            Err(err) => {
                // Skip this tick's recording but keep the clock monotonic
                warn!(elapsed_secs = self.elapsed_secs, %err, "scoring failed, tick skipped");
                self.elapsed_secs += self.time_step_secs;
                return TickOutcome::Skipped;
            }
        };

        let previous = self.leader.map(|(method, _)| method);
        let leader = self.tracker.observe(&scored, self.elapsed_secs);
        if let Some((method, _)) = leader {
            if previous != Some(method) {
                debug!(elapsed_secs = self.elapsed_secs, method = %method, "recommendation changed");
            }
            self.recommendation_history.push(RecommendationEvent {
                method,
                elapsed_secs: self.elapsed_secs,
            });
        }

        self.sample_history.push(SamplePoint {
            sample,
            elapsed_secs: self.elapsed_secs,
        });
        self.current_sample = sample;
        self.scored_methods = scored;
        self.leader = leader;
        self.elapsed_secs += self.time_step_secs;

        TickOutcome::Advanced
    }

    /// Immutable view of the state after the last completed tick
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            phase: self.phase,
            elapsed_secs: self.elapsed_secs,
            current_sample: self.current_sample,
            scored_methods: self.scored_methods.clone(),
            leader: self.leader,
            sample_history: self.sample_history.clone(),
            recommendation_history: self.recommendation_history.clone(),
            started_at: self.started_at,
        }
    }
}
