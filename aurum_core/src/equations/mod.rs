//! # Valuation Equations
//!
//! The closed-form formulas behind a ring valuation, kept in one place so
//! they can be checked against trade references independently of the
//! input handling in [`crate::calculations`].
//!
//! ## Modules
//!
//! - [`ring`] - Band width, sweep path, cross-section, volume and mass

pub mod ring;

pub use ring::{
    cross_section_area,
    hollowed_volume,
    mass,
    mean_circumference,
    swept_volume,
    tapered_mean_width,
};
