//! # Appraisal Records
//!
//! An `Appraisal` is a saved valuation: the exact input, the estimator
//! output it came from (if any), and the result. Records serialize to JSON
//! so a quote can be reopened and checked later.
//!
//! ## Structure
//!
//! ```text
//! Appraisal
//! ├── meta: AppraisalMetadata (schema version, id, label, timestamps)
//! ├── currency
//! ├── input: ValuationInput
//! ├── estimate: Option<RingEstimate>
//! └── result: CalculationResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::appraisal::Appraisal;
//! use aurum_core::calculations::ValuationInput;
//! use aurum_core::geometry::{HollowType, RingGeometry, RingProfile, Taper};
//! use aurum_core::materials::{GoldPurity, MaterialSpec};
//!
//! let input = ValuationInput {
//!     label: "Band".to_string(),
//!     geometry: RingGeometry {
//!         size: "56".to_string(),
//!         width_mm: 3.0,
//!         thickness_mm: 1.5,
//!         profile: RingProfile::Flat,
//!         taper: Taper::Uniform,
//!     },
//!     hollow: HollowType::None,
//!     material: MaterialSpec::new(GoldPurity::K18, 210.0),
//!     labor_cost: 375.0,
//!     range: None,
//! };
//!
//! let appraisal = Appraisal::create(input, None, "AED").unwrap();
//! assert!(appraisal.result.total_price > 375.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{compute, CalculationResult, ValuationInput};
use crate::errors::CalcResult;
use crate::estimate::RingEstimate;

/// Current schema version for appraisal files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A saved valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appraisal {
    /// Record metadata
    pub meta: AppraisalMetadata,

    /// Currency the prices are quoted in
    pub currency: String,

    /// Input the result was computed from
    pub input: ValuationInput,

    /// Estimator output, when the measurements came from a photo
    #[serde(default)]
    pub estimate: Option<RingEstimate>,

    /// Computed result
    pub result: CalculationResult,
}

impl Appraisal {
    /// Value `input` and wrap it in a new record.
    pub fn create(
        input: ValuationInput,
        estimate: Option<RingEstimate>,
        currency: impl Into<String>,
    ) -> CalcResult<Self> {
        let result = compute(&input)?;
        let now = Utc::now();
        Ok(Appraisal {
            meta: AppraisalMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                label: input.label.clone(),
                created: now,
                modified: now,
            },
            currency: currency.into(),
            input,
            estimate,
            result,
        })
    }

    /// Recompute the result from the stored input.
    ///
    /// Returns `true` if the stored result was stale.
    pub fn recompute(&mut self) -> CalcResult<bool> {
        let result = compute(&self.input)?;
        let changed = result != self.result;
        if changed {
            self.result = result;
            self.touch();
        }
        Ok(changed)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Appraisal metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Unique record id
    pub id: Uuid,

    /// User label copied from the input
    pub label: String,

    /// When the appraisal was created
    pub created: DateTime<Utc>,

    /// When the appraisal was last modified
    pub modified: DateTime<Utc>,
}
