//! Periodic tick driver and the read-only presentation handle
//!
//! One `tokio::time::interval` drives ticks sequentially on a single
//! task, so a tick always completes before the next fires. The loop
//! publishes an immutable snapshot over a watch channel after every
//! tick and exits, releasing the timer, when the terminal bound is
//! reached or shutdown is requested.

use std::future::Future;
use std::time::Duration;

use hydrorank_core::{
    Recommendation, RecommendationEvent, Result, Sample, SamplePoint, ScoredMethod, SimPhase,
    SimulationSnapshot,
};
use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::WatchStream;
use tracing::info;

use crate::config::SimConfig;
use crate::sampling::SampleGenerator;
use crate::simulation::state::{SimulationState, TickOutcome};

/// The simulation: generator, state, and snapshot publisher
pub struct Simulation<R: Rng = StdRng> {
    config: SimConfig,
    generator: SampleGenerator<R>,
    state: SimulationState,
    snapshot_tx: watch::Sender<SimulationSnapshot>,
}

impl Simulation<StdRng> {
    /// Simulation with an entropy-seeded generator
    pub fn new(config: SimConfig) -> Result<(Self, SimulationHandle)> {
        Self::with_generator(config, SampleGenerator::new())
    }
}

impl<R: Rng> Simulation<R> {
    /// Simulation with a caller-supplied generator (seeded in tests)
    pub fn with_generator(
        config: SimConfig,
        generator: SampleGenerator<R>,
    ) -> Result<(Self, SimulationHandle)> {
        config.validate()?;
        let state = SimulationState::new(&config);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let simulation = Self {
            config,
            generator,
            state,
            snapshot_tx,
        };
        Ok((simulation, SimulationHandle { rx: snapshot_rx }))
    }

    /// Run one tick: generate, transition, publish
    pub fn tick(&mut self) -> TickOutcome {
        let was_running = self.state.phase() == SimPhase::Running;
        let outcome = if was_running {
            let sample = self.generator.generate();
            self.state.apply_tick(sample)
        } else {
            TickOutcome::Stopped
        };

        // Publish once per processed tick, including the stopping one;
        // a stopped simulation stays silent.
        if was_running {
            self.snapshot_tx.send_replace(self.state.snapshot());
        }
        outcome
    }

    /// Drive ticks at the configured cadence until the terminal bound
    /// or the shutdown future resolves
    ///
    /// The timer is dropped on every exit path. Returns the final
    /// snapshot.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) -> SimulationSnapshot {
        let mut interval = tokio::time::interval(Duration::from_millis(self.config.tick_period_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            terminal_bound_secs = self.config.terminal_bound_secs,
            tick_period_ms = self.config.tick_period_ms,
            time_step_secs = self.config.time_step_secs,
            "simulation loop started"
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if self.tick() == TickOutcome::Stopped {
                        break;
                    }
                }
                _ = &mut shutdown => {
                    info!(elapsed_secs = self.state.elapsed_secs(), "shutdown requested, simulation cancelled");
                    break;
                }
            }
        }

        self.state.snapshot()
    }
}

/// Read-only view handed to the presentation layer
///
/// Wraps the watch receiver; every getter reads the latest published
/// snapshot, so a partially applied tick is never visible.
#[derive(Debug, Clone)]
pub struct SimulationHandle {
    rx: watch::Receiver<SimulationSnapshot>,
}

impl SimulationHandle {
    /// Latest full snapshot
    pub fn snapshot(&self) -> SimulationSnapshot {
        self.rx.borrow().clone()
    }

    /// Most recent measurement
    pub fn current_sample(&self) -> Sample {
        self.rx.borrow().current_sample
    }

    /// Scores for the most recent measurement, in definition order
    pub fn scored_methods(&self) -> Vec<ScoredMethod> {
        self.rx.borrow().scored_methods.clone()
    }

    /// Current recommendation with its validity interval
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.rx.borrow().recommendation()
    }

    /// All (sample, elapsed) pairs recorded so far
    pub fn sample_history(&self) -> Vec<SamplePoint> {
        self.rx.borrow().sample_history.clone()
    }

    /// All (method, elapsed) pairs recorded so far
    pub fn recommendation_history(&self) -> Vec<RecommendationEvent> {
        self.rx.borrow().recommendation_history.clone()
    }

    /// Simulated seconds elapsed
    pub fn elapsed_secs(&self) -> u64 {
        self.rx.borrow().elapsed_secs
    }

    /// Stream of snapshots, one per processed tick
    pub fn updates(&self) -> WatchStream<SimulationSnapshot> {
        WatchStream::new(self.rx.clone())
    }
}
