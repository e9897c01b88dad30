//! Recommendation - the top-ranked method and its validity interval
//!
//! The interval opens when a method first takes the lead and closes at
//! the current elapsed time; it is what the presentation banner shows.

use serde::{Deserialize, Serialize};

use crate::types::method::TreatmentMethod;

/// The currently recommended method with its validity interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The top-ranked method
    pub method: TreatmentMethod,
    /// Elapsed seconds at which this method became the leader
    pub valid_from_secs: u64,
    /// Current elapsed seconds (the interval is still open)
    pub valid_to_secs: u64,
}

impl Recommendation {
    /// Render the validity interval as `m:ss - m:ss`
    pub fn validity_label(&self) -> String {
        format!(
            "{} - {}",
            format_elapsed(self.valid_from_secs),
            format_elapsed(self.valid_to_secs)
        )
    }
}

/// One recommendation history entry: which method led at a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEvent {
    /// The method that led at this tick
    pub method: TreatmentMethod,
    /// Elapsed seconds when the tick ran
    pub elapsed_secs: u64,
}

/// Format elapsed seconds as `m:ss`
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
