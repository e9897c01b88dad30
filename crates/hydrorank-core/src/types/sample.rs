//! Sample - one water-quality measurement snapshot
//!
//! Samples are produced once per tick by the generator, are immutable
//! after creation, and feed the scorer. Every field is a non-negative
//! continuous measurement.

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Lowest pH accepted from an external source
pub const PH_MIN: f64 = 0.0;

/// Highest pH accepted from an external source
pub const PH_MAX: f64 = 14.0;

/// One water-quality measurement snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Water hardness (mg/L CaCO3)
    pub hardness: f64,
    /// pH, conventionally in [0, 14]
    pub ph: f64,
    /// Turbidity (NTU)
    pub turbidity: f64,
    /// Heavy-metals concentration (mg/L)
    pub heavy_metals: f64,
    /// Microorganism count (UFC/100mL)
    pub microorganisms: f64,
}

impl Default for Sample {
    /// Reference sample shown before the first tick lands
    fn default() -> Self {
        Self {
            hardness: 250.0,
            ph: 6.8,
            turbidity: 5.0,
            heavy_metals: 0.05,
            microorganisms: 100.0,
        }
    }
}

impl Sample {
    /// Validate an externally supplied sample
    ///
    /// Internally generated samples always satisfy these bounds; samples
    /// from outside must be rejected instead of scored.
    pub fn validate(&self) -> std::result::Result<(), SampleError> {
        for (field, value) in [
            ("hardness", self.hardness),
            ("ph", self.ph),
            ("turbidity", self.turbidity),
            ("heavy_metals", self.heavy_metals),
            ("microorganisms", self.microorganisms),
        ] {
            if !value.is_finite() {
                return Err(SampleError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(SampleError::Negative { field, value });
            }
        }

        if self.ph < PH_MIN || self.ph > PH_MAX {
            return Err(SampleError::PhOutOfRange {
                ph: self.ph,
                min: PH_MIN,
                max: PH_MAX,
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sample(hardness={:.2} mg/L, pH={:.2}, turbidity={:.2} NTU, metals={:.4} mg/L, micro={:.2} UFC/100mL)",
            self.hardness, self.ph, self.turbidity, self.heavy_metals, self.microorganisms
        )
    }
}
