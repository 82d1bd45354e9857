//! # aurum_core - Ring Gold Valuation Engine
//!
//! `aurum_core` estimates the gold mass and market value of a ring from its
//! geometry, purity and the current price per gram. Measurements usually come
//! from a photo estimator and prices from a market feed. Both live outside
//! this crate, which only defines the shapes it consumes from them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`compute`] is a pure function of one input value
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Fail Fast**: Invalid input yields a structured error, never a partial result
//! - **Round Late**: Full precision inside, rounding only on the result
//!
//! ## Quick Start
//!
//! ```rust
//! use aurum_core::calculations::{compute, ValuationInput};
//! use aurum_core::estimate::EstimateRange;
//! use aurum_core::geometry::{HollowType, RingGeometry, RingProfile, Taper};
//! use aurum_core::materials::{GoldPurity, MaterialSpec};
//!
//! let input = ValuationInput {
//!     label: "Sample".to_string(),
//!     geometry: RingGeometry {
//!         size: "52".to_string(),
//!         width_mm: 2.0,
//!         thickness_mm: 1.3,
//!         profile: RingProfile::Domed,
//!         taper: Taper::Uniform,
//!     },
//!     hollow: HollowType::None,
//!     material: MaterialSpec::new(GoldPurity::K21, 250.0),
//!     labor_cost: 375.0,
//!     range: Some(EstimateRange::new(1.8, 2.4)),
//! };
//!
//! let result = compute(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("796.42"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The valuation engine
//! - [`equations`] - Volume and mass formulas
//! - [`geometry`] - Band geometry, profile, taper, hollow construction
//! - [`materials`] - Gold purity grades and densities
//! - [`sizes`] - Ring size to circumference table
//! - [`pricing`] - Price per gram lookup
//! - [`estimate`] - Photo estimator output contract
//! - [`settings`] - Shop defaults (TOML)
//! - [`appraisal`] - Saved valuation records
//! - [`file_io`] - Atomic save/load of appraisal records
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod appraisal;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod estimate;
pub mod file_io;
pub mod geometry;
pub mod materials;
pub mod pricing;
pub mod settings;
pub mod sizes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use appraisal::Appraisal;
pub use calculations::{compute, CalculationResult, ValuationInput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_appraisal, save_appraisal};
pub use settings::ValuationSettings;
