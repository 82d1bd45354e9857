//! # Settings
//!
//! Shop-level defaults applied when an input leaves something out. Settings
//! live in a small TOML file; every key is optional.
//!
//! ```toml
//! labor_cost = 375.0
//! currency = "AED"
//! fallback_price_per_gram = 250.0
//! default_size = "52"
//! default_purity = "21K"
//! default_profile = "domed"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::LABOR_COST;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::RingProfile;
use crate::materials::GoldPurity;
use crate::sizes::{self, DEFAULT_SIZE};

/// Price per gram used when no market price is available
pub const FALLBACK_PRICE_PER_GRAM: f64 = 250.0;

/// Valuation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationSettings {
    /// Fixed labor charge per ring
    pub labor_cost: f64,

    /// Currency code for display
    pub currency: String,

    /// Price per gram used when the price source has none
    pub fallback_price_per_gram: f64,

    /// Size preselected for new valuations
    pub default_size: String,

    /// Purity preselected for new valuations
    pub default_purity: GoldPurity,

    /// Profile preselected for new valuations
    pub default_profile: RingProfile,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        ValuationSettings {
            labor_cost: LABOR_COST,
            currency: "AED".to_string(),
            fallback_price_per_gram: FALLBACK_PRICE_PER_GRAM,
            default_size: DEFAULT_SIZE.to_string(),
            default_purity: GoldPurity::K21,
            default_profile: RingProfile::Domed,
        }
    }
}

impl ValuationSettings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(s: &str) -> CalcResult<Self> {
        let settings: ValuationSettings = toml::from_str(s).map_err(|e| CalcError::ConfigError {
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        let settings = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Check the defaults are usable
    pub fn validate(&self) -> CalcResult<()> {
        if !self.labor_cost.is_finite() || self.labor_cost < 0.0 {
            return Err(CalcError::ConfigError {
                reason: format!("labor_cost must be zero or positive, got {}", self.labor_cost),
            });
        }
        if !self.fallback_price_per_gram.is_finite() || self.fallback_price_per_gram <= 0.0 {
            return Err(CalcError::ConfigError {
                reason: format!(
                    "fallback_price_per_gram must be positive, got {}",
                    self.fallback_price_per_gram
                ),
            });
        }
        if !sizes::is_known(&self.default_size) {
            return Err(CalcError::ConfigError {
                reason: format!("default_size '{}' is not a known ring size", self.default_size),
            });
        }
        Ok(())
    }
}
