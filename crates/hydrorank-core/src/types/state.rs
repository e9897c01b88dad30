//! Simulation snapshot - the read-only view published after each tick
//!
//! The engine mutates one private state value per tick and publishes an
//! immutable [`SimulationSnapshot`] clone, so the presentation layer
//! never observes a partially updated tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::method::TreatmentMethod;
use crate::types::recommendation::{Recommendation, RecommendationEvent};
use crate::types::sample::Sample;
use crate::types::scored::ScoredMethod;

/// Simulation lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks are still being processed
    Running,
    /// The terminal bound was reached; no further transitions
    Stopped,
}

/// One sample history entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// The measurement taken at this tick
    pub sample: Sample,
    /// Elapsed seconds when the tick ran
    pub elapsed_secs: u64,
}

/// Read-only view of the simulation after a tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Lifecycle phase
    pub phase: SimPhase,
    /// Simulated seconds elapsed so far
    pub elapsed_secs: u64,
    /// Most recent measurement
    pub current_sample: Sample,
    /// Scores for the most recent measurement, in definition order
    pub scored_methods: Vec<ScoredMethod>,
    /// Current leader and when it took the lead, if any tick has run
    pub leader: Option<(TreatmentMethod, u64)>,
    /// Every (sample, elapsed) pair recorded so far, insertion-ordered
    pub sample_history: Vec<SamplePoint>,
    /// Every (leader, elapsed) pair recorded so far, insertion-ordered
    pub recommendation_history: Vec<RecommendationEvent>,
    /// Wall-clock instant the run started
    pub started_at: DateTime<Utc>,
}

impl SimulationSnapshot {
    /// Initial snapshot before any tick has run
    pub fn initial() -> Self {
        Self {
            phase: SimPhase::Running,
            elapsed_secs: 0,
            current_sample: Sample::default(),
            scored_methods: Vec::new(),
            leader: None,
            sample_history: Vec::new(),
            recommendation_history: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Current recommendation with its open validity interval
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.leader.map(|(method, valid_from_secs)| Recommendation {
            method,
            valid_from_secs,
            valid_to_secs: self.elapsed_secs,
        })
    }
}
