//! Gold Purity Grades
//!
//! Karat grades offered by the valuation engine and their densities.
//! Densities are trade values for yellow gold alloys; 21K uses the
//! figure common in Gulf-market jewellery rather than a measured alloy.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::GramsPerCm3;

/// Gold purity grade (karat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum GoldPurity {
    /// 24 karat (99.9% gold)
    #[serde(rename = "24K")]
    K24,
    /// 22 karat (91.6%)
    #[serde(rename = "22K")]
    K22,
    /// 21 karat (87.5%)
    #[serde(rename = "21K")]
    #[default]
    K21,
    /// 18 karat (75.0%)
    #[serde(rename = "18K")]
    K18,
    /// 14 karat (58.5%)
    #[serde(rename = "14K")]
    K14,
}

impl GoldPurity {
    /// All purity grades, highest first
    pub const ALL: [GoldPurity; 5] = [
        GoldPurity::K24,
        GoldPurity::K22,
        GoldPurity::K21,
        GoldPurity::K18,
        GoldPurity::K14,
    ];

    /// Density in g/cm³
    pub fn density(&self) -> GramsPerCm3 {
        GramsPerCm3(self.density_g_per_cm3())
    }

    /// Density in g/cm³ as a raw value
    pub fn density_g_per_cm3(&self) -> f64 {
        match self {
            GoldPurity::K24 => 19.32,
            GoldPurity::K22 => 17.70,
            GoldPurity::K21 => 17.00,
            GoldPurity::K18 => 15.20,
            GoldPurity::K14 => 13.40,
        }
    }

    /// Short code ("21K")
    pub fn code(&self) -> &'static str {
        match self {
            GoldPurity::K24 => "24K",
            GoldPurity::K22 => "22K",
            GoldPurity::K21 => "21K",
            GoldPurity::K18 => "18K",
            GoldPurity::K14 => "14K",
        }
    }

    /// Parse from common string representations ("21K", "21k", "21", "K21")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-', '_'], "");
        let digits = normalized.trim_start_matches('K').trim_end_matches("KT").trim_end_matches('K');
        match digits {
            "24" => Ok(GoldPurity::K24),
            "22" => Ok(GoldPurity::K22),
            "21" => Ok(GoldPurity::K21),
            "18" => Ok(GoldPurity::K18),
            "14" => Ok(GoldPurity::K14),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GoldPurity::K24 => "24 Karat",
            GoldPurity::K22 => "22 Karat",
            GoldPurity::K21 => "21 Karat",
            GoldPurity::K18 => "18 Karat",
            GoldPurity::K14 => "14 Karat",
        }
    }
}

impl std::fmt::Display for GoldPurity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
