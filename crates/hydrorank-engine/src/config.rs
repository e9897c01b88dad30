//! Simulation configuration

use hydrorank_core::{HydrorankError, Result};
use serde::{Deserialize, Serialize};

/// Simulation runtime configuration
///
/// The tick cadence (`tick_period_ms`) and the simulated time step
/// (`time_step_secs`) are equal in the reference configuration but are
/// independent knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Simulated seconds after which the run stops
    pub terminal_bound_secs: u64,
    /// Wall-clock milliseconds between ticks
    pub tick_period_ms: u64,
    /// Simulated seconds added per tick
    pub time_step_secs: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            terminal_bound_secs: hydrorank_core::TERMINAL_BOUND_SECS,
            tick_period_ms: hydrorank_core::TICK_PERIOD_MS,
            time_step_secs: hydrorank_core::TIME_STEP_SECS,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment and .env file
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("HYDRORANK_TERMINAL_BOUND_SECS") {
            if let Ok(v) = val.parse() {
                cfg.terminal_bound_secs = v;
            }
        }
        if let Ok(val) = std::env::var("HYDRORANK_TICK_PERIOD_MS") {
            if let Ok(v) = val.parse() {
                cfg.tick_period_ms = v;
            }
        }
        if let Ok(val) = std::env::var("HYDRORANK_TIME_STEP_SECS") {
            if let Ok(v) = val.parse() {
                cfg.time_step_secs = v;
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the tick driver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(HydrorankError::Config(
                "tick_period_ms must be positive".into(),
            ));
        }
        if self.time_step_secs == 0 {
            return Err(HydrorankError::Config(
                "time_step_secs must be positive, elapsed time would never advance".into(),
            ));
        }
        Ok(())
    }
}
