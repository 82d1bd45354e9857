//! # Ring Geometry
//!
//! Describes the physical band: size, width, thickness, cross-section
//! profile, taper and hollow construction.
//!
//! ## Cross-Section Profiles
//!
//! ```text
//!   flat          domed          comfort
//!  ┌──────┐      ╭────╮        ╭──────╮
//!  │      │     ╱      ╲       │      │
//!  └──────┘    └────────┘      ╰──────╯
//!   A = w·t    A = (2/3)·w·t   A = 0.9·w·t
//! ```
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::geometry::{RingGeometry, RingProfile, Taper};
//!
//! let ring = RingGeometry {
//!     size: "52".to_string(),
//!     width_mm: 4.0,
//!     thickness_mm: 1.5,
//!     profile: RingProfile::Domed,
//!     taper: Taper::Tapered { edge_width_mm: 2.0 },
//! };
//! assert_eq!(ring.effective_width_mm(4.0), 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::ring;
use crate::errors::{CalcError, CalcResult};
use crate::sizes;

/// Cross-section profile of the band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RingProfile {
    /// Rectangular section
    Flat,
    /// Rounded outer face, two thirds of the bounding rectangle
    #[default]
    Domed,
    /// Shallow dome, 0.9 of the bounding rectangle
    #[serde(alias = "comfort-fit", alias = "comfort_fit")]
    Comfort,
}

impl RingProfile {
    /// Fraction of the bounding rectangle (width × thickness) the section fills
    pub fn area_factor(&self) -> f64 {
        match self {
            RingProfile::Flat => 1.0,
            RingProfile::Domed => 2.0 / 3.0,
            RingProfile::Comfort => 0.9,
        }
    }

    /// Parse a profile name, falling back to [`RingProfile::Flat`] for
    /// anything unrecognized.
    ///
    /// Older records store the profile as free text; a full rectangle is the
    /// conservative reading of an unknown shape.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "flat" => RingProfile::Flat,
            "domed" | "dome" | "court" => RingProfile::Domed,
            "comfort" | "comfort-fit" => RingProfile::Comfort,
            other => {
                tracing::warn!(profile = other, "unrecognized ring profile, using flat section");
                RingProfile::Flat
            }
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RingProfile::Flat => "Flat",
            RingProfile::Domed => "Domed",
            RingProfile::Comfort => "Comfort-fit",
        }
    }
}

impl std::fmt::Display for RingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Hollow construction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HollowType {
    /// Solid band
    #[default]
    None,
    /// Light hollowing, 30% of the material removed
    Light,
    /// Deep hollowing, 55% of the material removed
    Deep,
}

impl HollowType {
    /// Fraction of the solid volume removed
    pub fn reduction_fraction(&self) -> f64 {
        match self {
            HollowType::None => 0.0,
            HollowType::Light => 0.30,
            HollowType::Deep => 0.55,
        }
    }

    /// Parse from common string representations ("none", "solid", "light", "deep")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "solid" => Ok(HollowType::None),
            "light" | "light-hollow" => Ok(HollowType::Light),
            "deep" | "deep-hollow" => Ok(HollowType::Deep),
            _ => Err(CalcError::invalid_input(
                "hollow",
                s,
                "Hollow type must be one of none, light, deep",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HollowType::None => "Solid",
            HollowType::Light => "Light Hollow",
            HollowType::Deep => "Deep Hollow",
        }
    }
}

impl std::fmt::Display for HollowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Width variation across the band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum Taper {
    /// Same width all the way round
    #[default]
    Uniform,
    /// Width narrows linearly from the measured top to `edge_width_mm` at the shank
    Tapered { edge_width_mm: f64 },
}

/// Physical description of the band.
///
/// ## JSON Example
///
/// ```json
/// {
///   "size": "52",
///   "width_mm": 2.0,
///   "thickness_mm": 1.3,
///   "profile": "domed",
///   "taper": { "type": "Uniform" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Ring size label ("40" to "75")
    pub size: String,

    /// Band width at the point of measurement (mm)
    pub width_mm: f64,

    /// Radial band thickness (mm)
    pub thickness_mm: f64,

    /// Cross-section profile
    #[serde(default)]
    pub profile: RingProfile,

    /// Taper towards the shank
    #[serde(default)]
    pub taper: Taper,
}

impl RingGeometry {
    /// Inner circumference resolved from the size label
    pub fn circumference_mm(&self) -> CalcResult<f64> {
        sizes::circumference_mm(&self.size)
    }

    /// Effective width for a given measured width, accounting for taper
    pub fn effective_width_mm(&self, width_mm: f64) -> f64 {
        match self.taper {
            Taper::Uniform => width_mm,
            Taper::Tapered { edge_width_mm } => ring::tapered_mean_width(width_mm, edge_width_mm),
        }
    }

    /// Whether the band is tapered
    pub fn is_tapered(&self) -> bool {
        matches!(self.taper, Taper::Tapered { .. })
    }

    /// Validate all geometry inputs.
    ///
    /// The size must resolve and all linear dimensions must be positive.
    pub fn validate(&self) -> CalcResult<()> {
        self.circumference_mm()?;
        require_positive("width_mm", self.width_mm, "Width must be positive")?;
        require_positive("thickness_mm", self.thickness_mm, "Thickness must be positive")?;
        if let Taper::Tapered { edge_width_mm } = self.taper {
            require_positive(
                "edge_width_mm",
                edge_width_mm,
                "Tapered edge width must be positive",
            )?;
        }
        Ok(())
    }
}

/// Reject zero, negative and non-finite measurements
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_measurement(field, value, reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> RingGeometry {
        RingGeometry {
            size: "52".to_string(),
            width_mm: 2.0,
            thickness_mm: 1.3,
            profile: RingProfile::Domed,
            taper: Taper::Uniform,
        }
    }

    #[test]
    fn test_area_factors() {
        assert_eq!(RingProfile::Flat.area_factor(), 1.0);
        assert_eq!(RingProfile::Domed.area_factor(), 2.0 / 3.0);
        assert_eq!(RingProfile::Comfort.area_factor(), 0.9);
    }

    #[test]
    fn test_profile_label_fallback() {
        assert_eq!(RingProfile::from_label("Domed"), RingProfile::Domed);
        assert_eq!(RingProfile::from_label("comfort fit"), RingProfile::Comfort);
        assert_eq!(RingProfile::from_label("knife-edge"), RingProfile::Flat);
        assert_eq!(RingProfile::from_label(""), RingProfile::Flat);
    }

    #[test]
    fn test_profile_serde_is_closed() {
        let p: RingProfile = serde_json::from_str("\"comfort-fit\"").unwrap();
        assert_eq!(p, RingProfile::Comfort);
        assert!(serde_json::from_str::<RingProfile>("\"knife-edge\"").is_err());
    }

    #[test]
    fn test_hollow_fractions() {
        assert_eq!(HollowType::None.reduction_fraction(), 0.0);
        assert_eq!(HollowType::Light.reduction_fraction(), 0.30);
        assert_eq!(HollowType::Deep.reduction_fraction(), 0.55);
    }

    #[test]
    fn test_hollow_parse() {
        assert_eq!(HollowType::from_str_flexible("Deep").unwrap(), HollowType::Deep);
        assert_eq!(HollowType::from_str_flexible("solid").unwrap(), HollowType::None);
        let err = HollowType::from_str_flexible("medium").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_tapered_effective_width() {
        let mut ring = band();
        assert_eq!(ring.effective_width_mm(4.0), 4.0);
        ring.taper = Taper::Tapered { edge_width_mm: 2.0 };
        assert_eq!(ring.effective_width_mm(4.0), 3.0);
        assert!(ring.is_tapered());
    }

    #[test]
    fn test_validation() {
        assert!(band().validate().is_ok());

        let mut ring = band();
        ring.size = "90".to_string();
        assert_eq!(ring.validate().unwrap_err().error_code(), "INVALID_SIZE_KEY");

        let mut ring = band();
        ring.width_mm = 0.0;
        assert_eq!(ring.validate().unwrap_err().error_code(), "INVALID_MEASUREMENT");

        let mut ring = band();
        ring.thickness_mm = -1.0;
        assert!(ring.validate().is_err());

        let mut ring = band();
        ring.taper = Taper::Tapered { edge_width_mm: 0.0 };
        assert!(ring.validate().is_err());
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{ "size": "60", "width_mm": 3.0, "thickness_mm": 1.8 }"#;
        let ring: RingGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(ring.profile, RingProfile::Domed);
        assert_eq!(ring.taper, Taper::Uniform);
        assert_eq!(RingProfile::default(), RingProfile::Domed);
        assert_eq!(HollowType::default(), HollowType::None);

        let json = r#"{ "size": "60", "width_mm": 3.0, "thickness_mm": 1.8,
                        "profile": "flat", "taper": { "type": "Tapered", "edge_width_mm": 2.0 } }"#;
        let ring: RingGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(ring.taper, Taper::Tapered { edge_width_mm: 2.0 });
    }
}
