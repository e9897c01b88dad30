//! Pure sample -> scored-method mapping
//!
//! Starting from each method's base profile, a method-specific
//! adjustment reacts to the contaminants that method targets, then a
//! uniform pH-centering adjustment is applied to all methods. Sub-scores
//! are clamped to [0, 100] before the composite is computed.

use hydrorank_core::{
    Result, Sample, ScoredMethod, TreatmentMethod, PH_OPTIMUM, SCORE_MAX, SCORE_MIN,
};

/// Score every method against one sample, in definition order
pub fn score(sample: &Sample) -> Vec<ScoredMethod> {
    TreatmentMethod::ALL
        .iter()
        .map(|&method| score_method(method, sample))
        .collect()
}

/// Validate an externally supplied sample, then score it
///
/// Internally generated samples are in range by construction and go
/// through [`score`] directly.
pub fn score_checked(sample: &Sample) -> Result<Vec<ScoredMethod>> {
    sample.validate()?;
    Ok(score(sample))
}

fn score_method(method: TreatmentMethod, sample: &Sample) -> ScoredMethod {
    let base = method.base_profile();
    let mut efficacy = base.efficacy;
    let mut efficiency = base.efficiency;
    let viability = base.viability;

    match method {
        TreatmentMethod::ReverseOsmosis => {
            efficacy += (sample.heavy_metals * 200.0).min(20.0);
            efficiency -= (sample.hardness / 10.0).min(20.0);
        }
        TreatmentMethod::Ionization => {
            efficacy += (sample.hardness / 15.0).min(15.0);
            efficiency -= (sample.heavy_metals * 100.0).min(10.0);
        }
        TreatmentMethod::Chlorination => {
            efficacy += (sample.microorganisms / 5.0).min(20.0);
            efficacy -= (sample.heavy_metals * 150.0).min(15.0);
        }
        TreatmentMethod::UltravioletRadiation => {
            efficacy += (sample.microorganisms / 5.0).min(20.0);
            efficacy -= (sample.turbidity * 2.0).min(15.0);
        }
    }

    // pH centering: peaks at +10 on neutral water, goes negative as the
    // sample drifts from pH 7; the clamp below corrects any overshoot.
    let ph_delta = 10.0 - (sample.ph - PH_OPTIMUM).abs() * 2.0;
    efficacy += ph_delta;
    efficiency += ph_delta;

    ScoredMethod::new(
        method,
        efficacy.clamp(SCORE_MIN, SCORE_MAX),
        efficiency.clamp(SCORE_MIN, SCORE_MAX),
        viability.clamp(SCORE_MIN, SCORE_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrorank_core::SampleError;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn reference_sample() -> Sample {
        Sample {
            hardness: 250.0,
            ph: 6.8,
            turbidity: 5.0,
            heavy_metals: 0.05,
            microorganisms: 100.0,
        }
    }

    #[test]
    fn test_output_follows_definition_order() {
        let scored = score(&reference_sample());
        let methods: Vec<TreatmentMethod> = scored.iter().map(|s| s.method).collect();
        assert_eq!(methods, TreatmentMethod::ALL.to_vec());
    }

    #[test]
    fn test_reverse_osmosis_on_reference_sample() {
        // efficacy = 95 + min(20, 0.05*200) + (10 - |6.8-7|*2) = 114.6 -> clamps to 100
        // efficiency = 70 - min(20, 250/10) + 9.6 = 59.6
        let scored = score(&reference_sample());
        let ro = &scored[0];
        assert_eq!(ro.method, TreatmentMethod::ReverseOsmosis);
        assert_eq!(ro.efficacy, 100.0);
        assert!((ro.efficiency - 59.6).abs() < 1e-9);
        assert_eq!(ro.viability, 75.0);
        assert_eq!(ro.score, dec!(80.38));
    }

    #[test]
    fn test_chlorination_on_reference_sample() {
        // efficacy = 85 + min(20, 100/5) - min(15, 0.05*150) + 9.6 = 107.1 -> 100
        // efficiency = 90 + 9.6 = 99.6
        let scored = score(&reference_sample());
        let chl = &scored[2];
        assert_eq!(chl.method, TreatmentMethod::Chlorination);
        assert_eq!(chl.efficacy, 100.0);
        assert!((chl.efficiency - 99.6).abs() < 1e-9);
        assert_eq!(chl.score, dec!(98.38));
    }

    #[test]
    fn test_far_from_neutral_ph_penalizes() {
        let neutral = Sample {
            ph: 7.0,
            ..reference_sample()
        };
        let acidic = Sample {
            ph: 5.5,
            ..reference_sample()
        };
        let neutral_scores = score(&neutral);
        let acidic_scores = score(&acidic);
        // Ionization is unclamped on this sample on both axes
        assert!(acidic_scores[1].efficiency < neutral_scores[1].efficiency);
    }

    #[test]
    fn test_score_checked_rejects_invalid_sample() {
        let sample = Sample {
            ph: f64::INFINITY,
            ..reference_sample()
        };
        let err = score_checked(&sample).unwrap_err();
        assert!(matches!(
            err,
            hydrorank_core::HydrorankError::Sample(SampleError::NonFinite { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_sub_scores_stay_clamped(
            hardness in 0.0f64..2000.0,
            ph in 0.0f64..14.0,
            turbidity in 0.0f64..100.0,
            heavy_metals in 0.0f64..5.0,
            microorganisms in 0.0f64..2000.0,
        ) {
            let sample = Sample { hardness, ph, turbidity, heavy_metals, microorganisms };
            for scored in score(&sample) {
                prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&scored.efficacy));
                prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&scored.efficiency));
                prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&scored.viability));
            }
        }

        #[test]
        fn prop_scorer_is_idempotent(
            hardness in 100.0f64..400.0,
            ph in 5.5f64..8.5,
            turbidity in 0.0f64..10.0,
            heavy_metals in 0.0f64..0.1,
            microorganisms in 0.0f64..200.0,
        ) {
            let sample = Sample { hardness, ph, turbidity, heavy_metals, microorganisms };
            prop_assert_eq!(score(&sample), score(&sample));
        }
    }
}
