//! # Hydrorank Core
//!
//! Shared types, errors, and scoring constants for the Hydrorank
//! water-treatment recommendation simulator.
//!
//! ## Core Types
//!
//! - [`Sample`]: one synthetic water-quality measurement snapshot
//! - [`TreatmentMethod`]: the four fixed treatment techniques being compared
//! - [`ScoredMethod`]: per-method efficacy/efficiency/viability plus the
//!   composite score used for ranking
//! - [`Recommendation`]: the top-ranked method and its validity interval
//! - [`SimulationSnapshot`]: the read-only per-tick state handed to
//!   the presentation layer

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{HydrorankError, Result, SampleError};
pub use types::{
    method::{BaseProfile, TreatmentMethod},
    recommendation::{format_elapsed, Recommendation, RecommendationEvent},
    sample::Sample,
    scored::ScoredMethod,
    state::{SamplePoint, SimPhase, SimulationSnapshot},
};

/// Hydrorank version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated seconds the run covers before stopping (10 minutes)
pub const TERMINAL_BOUND_SECS: u64 = 600;

/// Wall-clock cadence of the tick driver in milliseconds
pub const TICK_PERIOD_MS: u64 = 5000;

/// Simulated seconds added to the clock per tick
pub const TIME_STEP_SECS: u64 = 5;

/// Lower clamp bound for every sub-score
pub const SCORE_MIN: f64 = 0.0;

/// Upper clamp bound for every sub-score
pub const SCORE_MAX: f64 = 100.0;

/// Composite weight on efficacy
pub const WEIGHT_EFFICACY: rust_decimal::Decimal = rust_decimal_macros::dec!(0.4);

/// Composite weight on efficiency
pub const WEIGHT_EFFICIENCY: rust_decimal::Decimal = rust_decimal_macros::dec!(0.3);

/// Composite weight on viability
pub const WEIGHT_VIABILITY: rust_decimal::Decimal = rust_decimal_macros::dec!(0.3);

/// pH at which the centering adjustment peaks
pub const PH_OPTIMUM: f64 = 7.0;
