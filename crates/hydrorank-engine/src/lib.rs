//! # Hydrorank Engine
//!
//! Simulation engine for the Hydrorank water-treatment recommender.
//!
//! Drives a bounded time-series of synthetic water-quality samples and,
//! on each tick, scores the four treatment methods and tracks the best
//! recommendation:
//!
//! ```text
//! generate -> score -> select -> record -> advance clock
//! ```
//!
//! ## Modules
//!
//! - [`sampling`]: uniform-random sample generation with injectable RNG
//! - [`scoring`]: pure sample -> scored-method mapping
//! - [`selection`]: leader selection and validity-interval tracking
//! - [`simulation`]: the tick loop, state holder, and presentation handle
//! - [`config`]: runtime knobs loaded from environment

pub mod config;
pub mod sampling;
pub mod scoring;
pub mod selection;
pub mod simulation;

pub use config::SimConfig;
pub use sampling::SampleGenerator;
pub use selection::RecommendationTracker;
pub use simulation::{Simulation, SimulationHandle, TickOutcome};
