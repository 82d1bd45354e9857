//! # Estimator Contract
//!
//! The photo estimator is an external collaborator. Whatever produces the
//! numbers, the engine only relies on this shape: a width range, a single
//! thickness, a confidence label and a short description.
//!
//! The estimator's own JSON uses camelCase keys (`estimatedWidthMinMm`, ...);
//! both those and the snake_case names used elsewhere in this crate are
//! accepted when deserializing.
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::estimate::RingEstimate;
//!
//! let json = r#"{
//!     "estimatedWidthMinMm": 2.4,
//!     "estimatedWidthMaxMm": 2.9,
//!     "estimatedThicknessMm": 1.4,
//!     "confidence": "Medium",
//!     "description": "Plain domed band"
//! }"#;
//! let estimate: RingEstimate = serde_json::from_str(json).unwrap();
//! assert_eq!(estimate.suggested_width_mm(), 2.65);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::require_positive;

/// Confidence label reported by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// Width bounds used to compute a low/high valuation band.
///
/// Invariant: `0 < width_min_mm <= width_max_mm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateRange {
    /// Narrowest plausible width (mm)
    pub width_min_mm: f64,
    /// Widest plausible width (mm)
    pub width_max_mm: f64,
}

impl EstimateRange {
    /// Create a range; call [`EstimateRange::validate`] before use
    pub fn new(width_min_mm: f64, width_max_mm: f64) -> Self {
        EstimateRange {
            width_min_mm,
            width_max_mm,
        }
    }

    /// Check both bounds are positive and ordered
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_min_mm", self.width_min_mm, "Minimum width must be positive")?;
        require_positive("width_max_mm", self.width_max_mm, "Maximum width must be positive")?;
        if self.width_min_mm > self.width_max_mm {
            return Err(CalcError::invalid_input(
                "range",
                format!("{} > {}", self.width_min_mm, self.width_max_mm),
                "Minimum width must not exceed maximum width",
            ));
        }
        Ok(())
    }

    /// Midpoint of the range
    pub fn midpoint_mm(&self) -> f64 {
        (self.width_min_mm + self.width_max_mm) / 2.0
    }
}

/// Estimator output for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EstimatorPayload")]
pub struct RingEstimate {
    pub width_min_mm: f64,
    pub width_max_mm: f64,
    pub thickness_mm: f64,
    pub confidence: Confidence,
    /// Free-text style description
    pub description: String,
}

/// Shape accepted when reading an estimate. Estimators may send the text
/// under `style`, `description` or both; `description` wins when present.
#[derive(Deserialize)]
struct EstimatorPayload {
    #[serde(alias = "estimatedWidthMinMm")]
    width_min_mm: f64,

    #[serde(alias = "estimatedWidthMaxMm")]
    width_max_mm: f64,

    #[serde(alias = "estimatedThicknessMm")]
    thickness_mm: f64,

    confidence: Confidence,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    style: Option<String>,
}

impl From<EstimatorPayload> for RingEstimate {
    fn from(payload: EstimatorPayload) -> Self {
        let description = payload
            .description
            .filter(|d| !d.trim().is_empty())
            .or(payload.style)
            .unwrap_or_default();
        RingEstimate {
            width_min_mm: payload.width_min_mm,
            width_max_mm: payload.width_max_mm,
            thickness_mm: payload.thickness_mm,
            confidence: payload.confidence,
            description,
        }
    }
}

impl RingEstimate {
    /// The estimate an estimator reports when it could not read the photo
    pub fn fallback() -> Self {
        RingEstimate {
            width_min_mm: 2.5,
            width_max_mm: 3.5,
            thickness_mm: 1.5,
            confidence: Confidence::Low,
            description: "Analysis error. Using fallback estimates.".to_string(),
        }
    }

    /// Width bounds as a range
    pub fn range(&self) -> EstimateRange {
        EstimateRange::new(self.width_min_mm, self.width_max_mm)
    }

    /// Point width to prefill: the midpoint of the range, rounded to 0.01 mm
    pub fn suggested_width_mm(&self) -> f64 {
        round_to(self.range().midpoint_mm(), 2)
    }

    /// Check the range and thickness are usable
    pub fn validate(&self) -> CalcResult<()> {
        self.range().validate()?;
        require_positive("thickness_mm", self.thickness_mm, "Thickness must be positive")
    }
}
