//! ScoredMethod - per-method scores derived from one sample
//!
//! Recomputed fresh on every tick; only the current list is retained.
//! The composite score uses decimal arithmetic with a fixed 2-decimal
//! rounding rule so ranking is deterministic across platforms.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::method::TreatmentMethod;
use crate::{WEIGHT_EFFICACY, WEIGHT_EFFICIENCY, WEIGHT_VIABILITY};

/// Scores for one treatment method against one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMethod {
    /// The method being scored
    pub method: TreatmentMethod,
    /// Contaminant-removal effectiveness (0-100)
    pub efficacy: f64,
    /// Operational efficiency (0-100)
    pub efficiency: f64,
    /// Deployment viability (0-100)
    pub viability: f64,
    /// Weighted composite used for ranking, fixed 2-decimal precision
    pub score: Decimal,
}

impl ScoredMethod {
    /// Build a scored method from already-clamped sub-scores
    pub fn new(method: TreatmentMethod, efficacy: f64, efficiency: f64, viability: f64) -> Self {
        Self {
            method,
            efficacy,
            efficiency,
            viability,
            score: composite_score(efficacy, efficiency, viability),
        }
    }
}

/// Weighted composite of the three sub-scores
///
/// score = 0.4·efficacy + 0.3·efficiency + 0.3·viability, rounded to
/// 2 decimal places half-away-from-zero.
pub fn composite_score(efficacy: f64, efficiency: f64, viability: f64) -> Decimal {
    let efficacy = Decimal::from_f64(efficacy).unwrap_or_default();
    let efficiency = Decimal::from_f64(efficiency).unwrap_or_default();
    let viability = Decimal::from_f64(viability).unwrap_or_default();

    (efficacy * WEIGHT_EFFICACY + efficiency * WEIGHT_EFFICIENCY + viability * WEIGHT_VIABILITY)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl std::fmt::Display for ScoredMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: efficacy={:.1}, efficiency={:.1}, viability={:.1}, score={}",
            self.method, self.efficacy, self.efficiency, self.viability, self.score
        )
    }
}
