//! Error types for the Hydrorank simulator
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using HydrorankError
pub type Result<T> = std::result::Result<T, HydrorankError>;

/// Unified error type for Hydrorank operations
#[derive(Debug, Error)]
pub enum HydrorankError {
    // Sample validation errors
    #[error("Invalid sample: {0}")]
    Sample(#[from] SampleError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Timer / tick-driver errors, fatal at startup
    #[error("Scheduler error: {0}")]
    Scheduler(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Sample validation errors
///
/// Externally supplied samples are rejected rather than silently
/// clamped into garbage scores.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Field {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Field {field} is negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("pH {ph} is outside the chemical range [{min}, {max}]")]
    PhOutOfRange { ph: f64, min: f64, max: f64 },
}

// Implement From for common external error types
impl From<serde_json::Error> for HydrorankError {
    fn from(err: serde_json::Error) -> Self {
        HydrorankError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for HydrorankError {
    fn from(err: anyhow::Error) -> Self {
        HydrorankError::Internal(err.to_string())
    }
}
