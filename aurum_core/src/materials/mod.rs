//! # Materials
//!
//! Gold purity grades and the material half of a valuation input.
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::materials::{GoldPurity, MaterialSpec};
//!
//! let material = MaterialSpec::new(GoldPurity::K18, 210.0);
//! assert_eq!(material.density_g_per_cm3(), 15.20);
//! ```

pub mod gold;

pub use gold::GoldPurity;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Purity grade plus the market price applied to it.
///
/// Density is not stored: it is always looked up from the purity grade.
///
/// ## JSON Example
///
/// ```json
/// { "purity": "21K", "price_per_gram": 250.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Karat grade
    pub purity: GoldPurity,

    /// Market price per gram for this purity (currency units)
    pub price_per_gram: f64,
}

impl MaterialSpec {
    /// Create a material spec
    pub fn new(purity: GoldPurity, price_per_gram: f64) -> Self {
        MaterialSpec {
            purity,
            price_per_gram,
        }
    }

    /// Density of the purity grade in g/cm³
    pub fn density_g_per_cm3(&self) -> f64 {
        self.purity.density_g_per_cm3()
    }

    /// Validate that the price is usable
    pub fn validate(&self) -> CalcResult<()> {
        if !self.price_per_gram.is_finite() || self.price_per_gram <= 0.0 {
            return Err(CalcError::invalid_measurement(
                "price_per_gram",
                self.price_per_gram,
                "Price per gram must be positive",
            ));
        }
        Ok(())
    }
}
