//! Leader selection and validity-interval tracking
//!
//! The leader is the method with the strictly greatest composite score.
//! Ties keep the earlier element, so the reduction is a stable
//! left-to-right pass over the definition order.

use hydrorank_core::{ScoredMethod, TreatmentMethod};

/// Pick the best-scoring method; first element wins ties
pub fn select_leader(scored: &[ScoredMethod]) -> Option<&ScoredMethod> {
    scored.iter().reduce(|best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    })
}

/// Tracks the current leader and when it took the lead
///
/// The lead-start time resets if and only if the leading method changes
/// between ticks.
#[derive(Debug, Default)]
pub struct RecommendationTracker {
    current: Option<(TreatmentMethod, u64)>,
}

impl RecommendationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current leader and lead-start time, if any tick has been observed
    pub fn current(&self) -> Option<(TreatmentMethod, u64)> {
        self.current
    }

    /// Observe one tick's scored list at the given elapsed time
    ///
    /// Returns the (possibly unchanged) leader and its lead-start time.
    pub fn observe(
        &mut self,
        scored: &[ScoredMethod],
        elapsed_secs: u64,
    ) -> Option<(TreatmentMethod, u64)> {
        let leader = select_leader(scored)?.method;
        match self.current {
            Some((method, since)) if method == leader => Some((method, since)),
            _ => {
                self.current = Some((leader, elapsed_secs));
                self.current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrorank_core::ScoredMethod;

    fn scored(method: TreatmentMethod, level: f64) -> ScoredMethod {
        ScoredMethod::new(method, level, level, level)
    }

    #[test]
    fn test_strictly_greatest_wins() {
        let list = vec![
            scored(TreatmentMethod::ReverseOsmosis, 70.0),
            scored(TreatmentMethod::Ionization, 90.0),
            scored(TreatmentMethod::Chlorination, 80.0),
        ];
        assert_eq!(
            select_leader(&list).unwrap().method,
            TreatmentMethod::Ionization
        );
    }

    #[test]
    fn test_tie_break_keeps_first_in_order() {
        let list = vec![
            scored(TreatmentMethod::ReverseOsmosis, 85.0),
            scored(TreatmentMethod::Ionization, 85.0),
            scored(TreatmentMethod::Chlorination, 85.0),
        ];
        assert_eq!(
            select_leader(&list).unwrap().method,
            TreatmentMethod::ReverseOsmosis
        );
    }

    #[test]
    fn test_empty_list_has_no_leader() {
        assert!(select_leader(&[]).is_none());
    }

    #[test]
    fn test_lead_start_resets_only_on_change() {
        let mut tracker = RecommendationTracker::new();

        let ro_leads = vec![
            scored(TreatmentMethod::ReverseOsmosis, 90.0),
            scored(TreatmentMethod::Chlorination, 80.0),
        ];
        let chl_leads = vec![
            scored(TreatmentMethod::ReverseOsmosis, 80.0),
            scored(TreatmentMethod::Chlorination, 90.0),
        ];

        assert_eq!(
            tracker.observe(&ro_leads, 0),
            Some((TreatmentMethod::ReverseOsmosis, 0))
        );
        // Same leader at t=5: start time unchanged
        assert_eq!(
            tracker.observe(&ro_leads, 5),
            Some((TreatmentMethod::ReverseOsmosis, 0))
        );
        // Leader flips at t=10: start time resets
        assert_eq!(
            tracker.observe(&chl_leads, 10),
            Some((TreatmentMethod::Chlorination, 10))
        );
    }
}
