//! TreatmentMethod - the fixed set of water-treatment techniques
//!
//! The four methods form a closed, process-wide constant table. Keeping
//! them as an enum makes the per-method scoring adjustments exhaustive
//! and statically checked.

use serde::{Deserialize, Serialize};

/// One of the four water-treatment techniques being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentMethod {
    ReverseOsmosis,
    Ionization,
    Chlorination,
    UltravioletRadiation,
}

/// Base efficacy/efficiency/viability constants for a method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseProfile {
    pub efficacy: f64,
    pub efficiency: f64,
    pub viability: f64,
}

impl TreatmentMethod {
    /// Every method, in the fixed definition order used for scoring
    /// output and tie-breaking
    pub const ALL: [TreatmentMethod; 4] = [
        TreatmentMethod::ReverseOsmosis,
        TreatmentMethod::Ionization,
        TreatmentMethod::Chlorination,
        TreatmentMethod::UltravioletRadiation,
    ];

    /// Human-readable method name
    pub const fn name(&self) -> &'static str {
        match self {
            TreatmentMethod::ReverseOsmosis => "Reverse osmosis",
            TreatmentMethod::Ionization => "Ionization",
            TreatmentMethod::Chlorination => "Chlorination",
            TreatmentMethod::UltravioletRadiation => "Ultraviolet radiation",
        }
    }

    /// Base score constants before sample-specific adjustment
    pub const fn base_profile(&self) -> BaseProfile {
        match self {
            TreatmentMethod::ReverseOsmosis => BaseProfile {
                efficacy: 95.0,
                efficiency: 70.0,
                viability: 75.0,
            },
            TreatmentMethod::Ionization => BaseProfile {
                efficacy: 88.0,
                efficiency: 80.0,
                viability: 85.0,
            },
            TreatmentMethod::Chlorination => BaseProfile {
                efficacy: 85.0,
                efficiency: 90.0,
                viability: 95.0,
            },
            TreatmentMethod::UltravioletRadiation => BaseProfile {
                efficacy: 90.0,
                efficiency: 85.0,
                viability: 90.0,
            },
        }
    }
}

impl std::fmt::Display for TreatmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_order() {
        let names: Vec<&str> = TreatmentMethod::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                "Reverse osmosis",
                "Ionization",
                "Chlorination",
                "Ultraviolet radiation"
            ]
        );
    }

    #[test]
    fn test_base_profiles_in_score_range() {
        for method in TreatmentMethod::ALL {
            let base = method.base_profile();
            for value in [base.efficacy, base.efficiency, base.viability] {
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }
}
