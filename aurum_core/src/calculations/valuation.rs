//! # Ring Valuation
//!
//! Converts ring geometry, gold purity and market price into metal volume,
//! mass and total price, plus an optional low/high band when the width is
//! only known as a range.
//!
//! ## Method
//!
//! 1. Effective width: mean of top and edge width for tapered bands
//! 2. Mean circumference: C + π·t
//! 3. Cross-section: k·w·t with k from the profile
//! 4. Volume: mean circumference × cross-section
//! 5. Hollowing: volume × (1 − f), applied once
//! 6. Mass: hollowed volume × density
//! 7. Solder buffer: mass × 1.02
//! 8. Price: mass × price per gram + labor cost
//!
//! Results are rounded only on the way out: volume to 0.001 cm³, mass and
//! prices to 0.01.
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::calculations::valuation::{compute, ValuationInput};
//! use aurum_core::geometry::{HollowType, RingGeometry, RingProfile, Taper};
//! use aurum_core::materials::{GoldPurity, MaterialSpec};
//!
//! let input = ValuationInput {
//!     label: "Wedding band".to_string(),
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
//!     range: None,
//! };
//!
//! let result = compute(&input).unwrap();
//! assert_eq!(result.mass_grams, 1.69);
//! assert_eq!(result.total_price, 796.42);
//! ```

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::equations::ring;
use crate::errors::{CalcError, CalcResult};
use crate::estimate::EstimateRange;
use crate::geometry::{HollowType, RingGeometry};
use crate::materials::MaterialSpec;
use crate::units::Millimeters;

/// Multiplier on the metal mass for solder added during assembly
pub const SOLDER_BUFFER: f64 = 1.02;

/// Default fixed labor charge added to every ring (currency units)
pub const LABOR_COST: f64 = 375.0;

fn default_labor_cost() -> f64 {
    LABOR_COST
}

/// Everything a valuation needs, in one immutable value.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Wedding band",
///   "geometry": { "size": "52", "width_mm": 2.0, "thickness_mm": 1.3, "profile": "domed" },
///   "hollow": "none",
///   "material": { "purity": "21K", "price_per_gram": 250.0 },
///   "labor_cost": 375.0,
///   "range": { "width_min_mm": 1.8, "width_max_mm": 2.4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// User label for this ring
    #[serde(default)]
    pub label: String,

    /// Band geometry
    pub geometry: RingGeometry,

    /// Hollow construction
    #[serde(default)]
    pub hollow: HollowType,

    /// Purity and market price
    pub material: MaterialSpec,

    /// Fixed labor charge added to the material price
    #[serde(default = "default_labor_cost")]
    pub labor_cost: f64,

    /// Estimated width bounds for a low/high band
    #[serde(default)]
    pub range: Option<EstimateRange>,
}

impl ValuationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.material.validate()?;
        if !self.labor_cost.is_finite() || self.labor_cost < 0.0 {
            return Err(CalcError::invalid_input(
                "labor_cost",
                self.labor_cost.to_string(),
                "Labor cost must be zero or positive",
            ));
        }
        if let Some(range) = &self.range {
            range.validate()?;
        }
        Ok(())
    }
}

/// Full-precision figures for a single measured width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthValuation {
    /// Width as measured (mm)
    pub width_mm: f64,
    /// Width used in the section after taper (mm)
    pub effective_width_mm: f64,
    /// Centreline circumference (mm)
    pub mean_circumference_mm: f64,
    /// Cross-section area (mm²)
    pub area_mm2: f64,
    /// Metal volume after hollowing (cm³)
    pub volume_cm3: f64,
    /// Mass including solder buffer (g)
    pub mass_grams: f64,
    /// mass × price per gram
    pub material_price: f64,
    /// material price + labor cost
    pub total_price: f64,
}

/// Unrounded valuation: the point estimate and, when a range was given,
/// the figures at each end of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub point: WidthValuation,
    pub low: Option<WidthValuation>,
    pub high: Option<WidthValuation>,
}

/// Low/high band from the estimated width range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub min_volume_cm3: f64,
    pub max_volume_cm3: f64,
    pub min_mass_grams: f64,
    pub max_mass_grams: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Results from a valuation, rounded for display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_cm3": 0.097,
///   "mass_grams": 1.69,
///   "material_price": 421.42,
///   "total_price": 796.42,
///   "range": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Metal volume (cm³, 3 decimals)
    pub volume_cm3: f64,
    /// Gold mass (g, 2 decimals)
    pub mass_grams: f64,
    /// Price of the gold alone (2 decimals)
    pub material_price: f64,
    /// Material price plus labor (2 decimals)
    pub total_price: f64,
    /// Band from the estimated width range
    pub range: Option<ValuationRange>,
}

impl From<&Valuation> for CalculationResult {
    fn from(v: &Valuation) -> Self {
        let range = match (v.low, v.high) {
            (Some(low), Some(high)) => Some(ValuationRange {
                min_volume_cm3: round_to(low.volume_cm3, 3),
                max_volume_cm3: round_to(high.volume_cm3, 3),
                min_mass_grams: round_to(low.mass_grams, 2),
                max_mass_grams: round_to(high.mass_grams, 2),
                min_price: round_to(low.total_price, 2),
                max_price: round_to(high.total_price, 2),
            }),
            _ => None,
        };
        CalculationResult {
            volume_cm3: round_to(v.point.volume_cm3, 3),
            mass_grams: round_to(v.point.mass_grams, 2),
            material_price: round_to(v.point.material_price, 2),
            total_price: round_to(v.point.total_price, 2),
            range,
        }
    }
}

/// Value one width with everything else in the input held fixed.
fn value_at_width(input: &ValuationInput, inner_circumference_mm: f64, width_mm: f64) -> WidthValuation {
    let geometry = &input.geometry;
    let thickness = Millimeters(geometry.thickness_mm);
    let effective_width = Millimeters(geometry.effective_width_mm(width_mm));

    let mean_circumference = ring::mean_circumference(Millimeters(inner_circumference_mm), thickness);
    let area = ring::cross_section_area(geometry.profile.area_factor(), effective_width, thickness);
    let solid = ring::swept_volume(mean_circumference, area);
    let volume = ring::hollowed_volume(solid, input.hollow.reduction_fraction());
    let mass = ring::mass(volume, input.material.purity.density()) * SOLDER_BUFFER;

    let material_price = mass.0 * input.material.price_per_gram;

    WidthValuation {
        width_mm,
        effective_width_mm: effective_width.0,
        mean_circumference_mm: mean_circumference.0,
        area_mm2: area.0,
        volume_cm3: volume.0,
        mass_grams: mass.0,
        material_price,
        total_price: material_price + input.labor_cost,
    }
}

/// Reject results that overflowed; they cannot be stored or compared.
fn require_finite(v: &WidthValuation) -> CalcResult<()> {
    for (field, value) in [
        ("volume_cm3", v.volume_cm3),
        ("mass_grams", v.mass_grams),
        ("material_price", v.material_price),
        ("total_price", v.total_price),
    ] {
        if !value.is_finite() {
            return Err(CalcError::invalid_measurement(
                field,
                value,
                format!("Result at width {} mm is out of range; check the input magnitudes", v.width_mm),
            ));
        }
    }
    Ok(())
}

/// Run the valuation at full precision.
///
/// # Returns
///
/// * `Ok(Valuation)` - Point estimate plus range ends when a range was given
/// * `Err(CalcError)` - If the size is unknown or any measurement is invalid
pub fn evaluate(input: &ValuationInput) -> CalcResult<Valuation> {
    input.validate()?;
    let inner = input.geometry.circumference_mm()?;

    let point = value_at_width(input, inner, input.geometry.width_mm);
    let (low, high) = match &input.range {
        Some(range) => (
            Some(value_at_width(input, inner, range.width_min_mm)),
            Some(value_at_width(input, inner, range.width_max_mm)),
        ),
        None => (None, None),
    };
    for v in std::iter::once(&point).chain(low.as_ref()).chain(high.as_ref()) {
        require_finite(v)?;
    }

    tracing::debug!(
        label = %input.label,
        size = %input.geometry.size,
        purity = %input.material.purity,
        volume_cm3 = point.volume_cm3,
        mass_grams = point.mass_grams,
        total_price = point.total_price,
        tapered = input.geometry.is_tapered(),
        has_range = input.range.is_some(),
        "ring valued"
    );

    Ok(Valuation { point, low, high })
}

/// Compute a ring valuation, rounded for display.
///
/// # Arguments
///
/// * `input` - Ring geometry, hollow type, material, labor cost and optional range
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Rounded results
/// * `Err(CalcError)` - If inputs are invalid; no partial result is produced
pub fn compute(input: &ValuationInput) -> CalcResult<CalculationResult> {
    let valuation = evaluate(input)?;
    Ok(CalculationResult::from(&valuation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{RingProfile, Taper};
    use crate::materials::GoldPurity;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn test_ring() -> ValuationInput {
        ValuationInput {
            label: "Test Ring".to_string(),
            geometry: RingGeometry {
                size: "52".to_string(),
                width_mm: 2.0,
                thickness_mm: 1.3,
                profile: RingProfile::Domed,
                taper: Taper::Uniform,
            },
            hollow: HollowType::None,
            material: MaterialSpec::new(GoldPurity::K21, 250.0),
            labor_cost: LABOR_COST,
            range: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let v = evaluate(&test_ring()).unwrap().point;

        // C_mean = 52 + π·1.3 = 56.084
        assert!((v.mean_circumference_mm - 56.0841).abs() < 1e-3);
        // A = (2/3)·2.0·1.3 = 1.7333
        assert!((v.area_mm2 - 1.73333).abs() < 1e-4);
        // V = 97.212 mm³ = 0.097212 cm³
        assert!((v.volume_cm3 - 0.0972124).abs() < 1e-6);
        // m = 0.097212 × 17.00 × 1.02 = 1.6857 g
        assert!((v.mass_grams - 1.68566).abs() < 1e-4);
        // P = 1.6857 × 250 + 375 = 796.416
        assert!((v.material_price - 421.4157).abs() < 1e-3);
        assert!((v.total_price - 796.4157).abs() < 1e-3);

        let result = compute(&test_ring()).unwrap();
        assert_eq!(result.volume_cm3, 0.097);
        assert_eq!(result.mass_grams, 1.69);
        assert_eq!(result.material_price, 421.42);
        assert_eq!(result.total_price, 796.42);
        assert!(result.range.is_none());
    }

    #[test]
    fn test_total_is_material_plus_labor() {
        for labor in [0.0, 375.0, 1250.5] {
            let mut input = test_ring();
            input.labor_cost = labor;
            let v = evaluate(&input).unwrap().point;
            assert_eq!(v.total_price, v.material_price + labor);
        }
    }

    #[test]
    fn test_profile_area_ratios() {
        let mut input = test_ring();
        input.geometry.profile = RingProfile::Flat;
        let flat = evaluate(&input).unwrap().point;
        input.geometry.profile = RingProfile::Domed;
        let domed = evaluate(&input).unwrap().point;
        input.geometry.profile = RingProfile::Comfort;
        let comfort = evaluate(&input).unwrap().point;

        assert!(approx_eq(domed.area_mm2, flat.area_mm2 * 2.0 / 3.0));
        assert!(approx_eq(comfort.area_mm2, flat.area_mm2 * 0.9));
        assert!(approx_eq(domed.volume_cm3, flat.volume_cm3 * 2.0 / 3.0));
    }

    #[test]
    fn test_hollow_reduction_applied_once() {
        let mut input = test_ring();
        let solid = evaluate(&input).unwrap().point;
        input.hollow = HollowType::Light;
        let light = evaluate(&input).unwrap().point;
        input.hollow = HollowType::Deep;
        let deep = evaluate(&input).unwrap().point;

        assert!(approx_eq(light.mass_grams, solid.mass_grams * 0.70));
        assert!(approx_eq(light.volume_cm3, solid.volume_cm3 * 0.70));
        assert!(approx_eq(deep.mass_grams, light.mass_grams * (1.0 - 0.55) / (1.0 - 0.30)));

        // Mass follows from the hollowed volume, not a second reduction
        let density = GoldPurity::K21.density_g_per_cm3();
        assert!(approx_eq(deep.mass_grams, deep.volume_cm3 * density * SOLDER_BUFFER));
    }

    #[test]
    fn test_taper_uses_mean_width() {
        let mut input = test_ring();
        input.geometry.width_mm = 4.0;
        input.geometry.taper = Taper::Tapered { edge_width_mm: 2.0 };
        let tapered = evaluate(&input).unwrap().point;
        assert_eq!(tapered.effective_width_mm, 3.0);

        let mut uniform = test_ring();
        uniform.geometry.width_mm = 3.0;
        let uniform = evaluate(&uniform).unwrap().point;
        assert_eq!(tapered.volume_cm3, uniform.volume_cm3);
    }

    #[test]
    fn test_range_band() {
        let mut input = test_ring();
        input.range = Some(EstimateRange::new(1.8, 2.4));
        let result = compute(&input).unwrap();
        let range = result.range.unwrap();

        assert_eq!(range.min_volume_cm3, 0.087);
        assert_eq!(range.max_volume_cm3, 0.117);
        assert_eq!(range.min_mass_grams, 1.52);
        assert_eq!(range.max_mass_grams, 2.02);
        assert_eq!(range.min_price, 754.27);
        assert_eq!(range.max_price, 880.7);

        // Point estimate is unaffected by the range
        assert_eq!(result.total_price, 796.42);
    }

    #[test]
    fn test_range_follows_taper() {
        let mut input = test_ring();
        input.geometry.taper = Taper::Tapered { edge_width_mm: 2.0 };
        input.range = Some(EstimateRange::new(2.0, 4.0));
        let v = evaluate(&input).unwrap();
        assert_eq!(v.low.unwrap().effective_width_mm, 2.0);
        assert_eq!(v.high.unwrap().effective_width_mm, 3.0);
    }

    #[test]
    fn test_idempotent() {
        let mut input = test_ring();
        input.range = Some(EstimateRange::new(1.5, 2.5));
        let a = compute(&input).unwrap();
        let b = compute(&input).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_price.to_bits(), b.total_price.to_bits());
    }

    #[test]
    fn test_invalid_size() {
        let mut input = test_ring();
        input.geometry.size = "39".to_string();
        let err = compute(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SIZE_KEY");
    }

    #[test]
    fn test_invalid_measurements() {
        let mut input = test_ring();
        input.geometry.width_mm = 0.0;
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");

        let mut input = test_ring();
        input.geometry.thickness_mm = -1.3;
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");

        let mut input = test_ring();
        input.material.price_per_gram = 0.0;
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");

        let mut input = test_ring();
        input.range = Some(EstimateRange::new(-1.0, 2.0));
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let mut input = test_ring();
        input.geometry.width_mm = 1e300;
        input.geometry.thickness_mm = 1e10;
        let err = compute(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MEASUREMENT");

        // Point is fine but the wide end of the range overflows
        let mut input = test_ring();
        input.range = Some(EstimateRange::new(2.0, 1e308));
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");

        // Huge price per gram overflows only the price
        let mut input = test_ring();
        input.material.price_per_gram = f64::MAX;
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_MEASUREMENT");
    }

    #[test]
    fn test_invalid_range_and_labor() {
        let mut input = test_ring();
        input.range = Some(EstimateRange::new(3.0, 2.0));
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_ring();
        input.labor_cost = -1.0;
        assert_eq!(compute(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_input() {
        let json = r#"{
            "label": "Wedding band",
            "geometry": { "size": "52", "width_mm": 2.0, "thickness_mm": 1.3, "profile": "domed" },
            "material": { "purity": "21K", "price_per_gram": 250.0 }
        }"#;
        let input: ValuationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.hollow, HollowType::None);
        assert_eq!(input.labor_cost, LABOR_COST);
        assert!(input.range.is_none());
        assert_eq!(compute(&input).unwrap().total_price, 796.42);
    }

    #[test]
    fn test_result_serialization() {
        let mut input = test_ring();
        input.range = Some(EstimateRange::new(1.8, 2.4));
        let result = compute(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"total_price\": 796.42"));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    fn any_profile() -> impl Strategy<Value = RingProfile> {
        prop_oneof![
            Just(RingProfile::Flat),
            Just(RingProfile::Domed),
            Just(RingProfile::Comfort),
        ]
    }

    fn any_hollow() -> impl Strategy<Value = HollowType> {
        prop_oneof![
            Just(HollowType::None),
            Just(HollowType::Light),
            Just(HollowType::Deep),
        ]
    }

    proptest! {
        #[test]
        fn volume_increases_with_width(
            profile in any_profile(),
            width in 0.5f64..12.0,
            step in 0.01f64..5.0,
            thickness in 0.3f64..4.0,
        ) {
            let mut input = test_ring();
            input.geometry.profile = profile;
            input.geometry.thickness_mm = thickness;
            input.geometry.width_mm = width;
            let narrow = evaluate(&input).unwrap().point;
            input.geometry.width_mm = width + step;
            let wide = evaluate(&input).unwrap().point;
            prop_assert!(wide.volume_cm3 > narrow.volume_cm3);
        }

        #[test]
        fn volume_increases_with_thickness(
            profile in any_profile(),
            width in 0.5f64..12.0,
            thickness in 0.3f64..4.0,
            step in 0.01f64..3.0,
        ) {
            let mut input = test_ring();
            input.geometry.profile = profile;
            input.geometry.width_mm = width;
            input.geometry.thickness_mm = thickness;
            let thin = evaluate(&input).unwrap().point;
            input.geometry.thickness_mm = thickness + step;
            let thick = evaluate(&input).unwrap().point;
            prop_assert!(thick.volume_cm3 > thin.volume_cm3);
        }

        #[test]
        fn range_is_ordered(
            profile in any_profile(),
            hollow in any_hollow(),
            min in 0.5f64..8.0,
            spread in 0.0f64..4.0,
            price in 1.0f64..1000.0,
        ) {
            let mut input = test_ring();
            input.geometry.profile = profile;
            input.hollow = hollow;
            input.material.price_per_gram = price;
            input.range = Some(EstimateRange::new(min, min + spread));
            let range = compute(&input).unwrap().range.unwrap();
            prop_assert!(range.min_volume_cm3 <= range.max_volume_cm3);
            prop_assert!(range.min_mass_grams <= range.max_mass_grams);
            prop_assert!(range.min_price <= range.max_price);
        }

        #[test]
        fn total_always_adds_labor(
            width in 0.5f64..12.0,
            labor in 0.0f64..5000.0,
        ) {
            let mut input = test_ring();
            input.geometry.width_mm = width;
            input.labor_cost = labor;
            let v = evaluate(&input).unwrap().point;
            prop_assert_eq!(v.total_price, v.material_price + labor);
        }
    }
}
