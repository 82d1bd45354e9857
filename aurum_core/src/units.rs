//! # Unit Types
//!
//! Type-safe wrappers for the handful of units a ring valuation touches.
//! They are plain `f64` newtypes: they serialize as bare numbers and cost
//! nothing at runtime, but keep millimetres from being mixed up with
//! cubic centimetres inside the formulas.
//!
//! ## Metric Units
//!
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Volume: cubic millimetres (mm³), cubic centimetres (cm³)
//! - Mass: grams (g)
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::units::{CubicCm, CubicMm};
//!
//! let volume = CubicMm(97.2);
//! let volume_cm3: CubicCm = volume.into();
//! assert!((volume_cm3.0 - 0.0972).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length / Area / Volume
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Volume in cubic millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMm(pub f64);

/// Volume in cubic centimetres (1 cm³ = 1000 mm³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCm(pub f64);

impl From<CubicMm> for CubicCm {
    fn from(mm3: CubicMm) -> Self {
        CubicCm(mm3.0 / 1000.0)
    }
}

impl From<CubicCm> for CubicMm {
    fn from(cm3: CubicCm) -> Self {
        CubicMm(cm3.0 * 1000.0)
    }
}

impl Mul<Millimeters> for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Millimeters) -> SqMm {
        SqMm(self.0 * rhs.0)
    }
}

impl Mul<SqMm> for Millimeters {
    type Output = CubicMm;
    fn mul(self, rhs: SqMm) -> CubicMm {
        CubicMm(self.0 * rhs.0)
    }
}

// ============================================================================
// Mass
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Density in grams per cubic centimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerCm3(pub f64);

impl Mul<GramsPerCm3> for CubicCm {
    type Output = Grams;
    fn mul(self, rhs: GramsPerCm3) -> Grams {
        Grams(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(SqMm);
impl_arithmetic!(CubicMm);
impl_arithmetic!(CubicCm);
impl_arithmetic!(Grams);
impl_arithmetic!(GramsPerCm3);
