//! # Ring Band Formulas
//!
//! Closed-form approximations for the volume of a finger ring. The band is
//! treated as a thin torus: a constant cross-section swept along the
//! centreline of the band.
//!
//! ## Notation
//!
//! - `C` = Inner circumference (from the ring size)
//! - `w` = Band width (top to bottom as worn)
//! - `t` = Radial thickness
//! - `k` = Profile area factor (flat 1.0, domed 2/3, comfort 0.9)
//! - `f` = Hollow reduction fraction
//! - `ρ` = Alloy density
//!
//! ```text
//!        ╭──── w ────╮
//!        │           │ t
//!   ─────┴───────────┴───── inner surface, length C
//! ```
//!
//! ## Conventions
//!
//! - Lengths in millimetres, volumes returned in mm³ unless the name says cm³
//! - Mean circumference is `C + π·t`: the centreline sits t/2 outside the
//!   inner surface, and 2π·(t/2) = π·t

use std::f64::consts::PI;

use crate::units::{CubicCm, CubicMm, Grams, GramsPerCm3, Millimeters, SqMm};

// =============================================================================
// WIDTH
// =============================================================================

/// Mean width of a linearly tapered band
///
/// # Formula
/// w_eff = (w_top + w_edge) / 2
///
/// # Example
/// ```rust
/// use aurum_core::equations::ring::tapered_mean_width;
///
/// assert_eq!(tapered_mean_width(4.0, 2.0), 3.0);
/// ```
#[inline]
pub fn tapered_mean_width(top_width: f64, edge_width: f64) -> f64 {
    (top_width + edge_width) / 2.0
}

// =============================================================================
// SWEEP PATH AND SECTION
// =============================================================================

/// Mean (centreline) circumference of the band
///
/// # Formula
/// C_mean = C + π·t
///
/// # Example
/// ```rust
/// use aurum_core::equations::ring::mean_circumference;
/// use aurum_core::units::Millimeters;
///
/// let c = mean_circumference(Millimeters(52.0), Millimeters(1.3));
/// assert!((c.0 - 56.084).abs() < 0.001);
/// ```
#[inline]
pub fn mean_circumference(inner: Millimeters, thickness: Millimeters) -> Millimeters {
    Millimeters(inner.0 + PI * thickness.0)
}

/// Cross-sectional area of the band
///
/// # Formula
/// A = k·w·t
#[inline]
pub fn cross_section_area(area_factor: f64, width: Millimeters, thickness: Millimeters) -> SqMm {
    (width * thickness) * area_factor
}

/// Swept volume of a constant section along the mean circumference
///
/// # Formula
/// V = C_mean · A
#[inline]
pub fn swept_volume(mean_circumference: Millimeters, area: SqMm) -> CubicMm {
    mean_circumference * area
}

// =============================================================================
// MATERIAL
// =============================================================================

/// Metal volume after hollowing, in cm³
///
/// # Formula
/// V_metal = (V / 1000)·(1 − f)
#[inline]
pub fn hollowed_volume(solid: CubicMm, reduction_fraction: f64) -> CubicCm {
    CubicCm::from(solid) * (1.0 - reduction_fraction)
}

/// Mass of a metal volume
///
/// # Formula
/// m = V_metal · ρ
#[inline]
pub fn mass(volume: CubicCm, density: GramsPerCm3) -> Grams {
    volume * density
}
