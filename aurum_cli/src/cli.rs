//! Command-line arguments and their conversion into a valuation input.
//!
//! Parsing lives here; the valuation itself stays in `aurum_core`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use aurum_core::calculations::ValuationInput;
use aurum_core::errors::{CalcError, CalcResult};
use aurum_core::estimate::{EstimateRange, RingEstimate};
use aurum_core::geometry::{HollowType, RingGeometry, RingProfile, Taper};
use aurum_core::materials::{GoldPurity, MaterialSpec};
use aurum_core::pricing::{price_or_fallback, PriceSource, PriceTable};
use aurum_core::settings::ValuationSettings;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "aurum", version, about = "Ring gold mass and value estimator")]
pub struct Cli {
    /// Settings file (TOML) with labor cost, currency and defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value a ring from measurements, an estimator result, or both
    Value(ValueArgs),
    /// Value a ring from a JSON input file
    Appraise(AppraiseArgs),
    /// Print a saved appraisal
    Show {
        /// Appraisal file written by `--save`
        path: PathBuf,
    },
    /// List ring sizes and their inner circumference
    Sizes,
    /// List purity grades and densities
    Purities,
}

/// Options shared by commands that produce a result.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the appraisal record to this path
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for `aurum appraise`.
#[derive(Debug, Args, Clone)]
pub struct AppraiseArgs {
    /// JSON file holding a valuation input
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `aurum value`.
#[derive(Debug, Args, Clone, Default)]
pub struct ValueArgs {
    /// Label stored with the appraisal
    #[arg(long, default_value = "")]
    pub label: String,

    /// Ring size label (inner circumference in mm, 40 to 75)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Band width in mm (defaults to the estimate midpoint)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Band thickness in mm (defaults to the estimated thickness)
    #[arg(short, long)]
    pub thickness: Option<f64>,

    /// Cross-section profile: flat, domed, comfort
    #[arg(long)]
    pub profile: Option<String>,

    /// Hollow construction: none, light, deep
    #[arg(long, default_value = "none")]
    pub hollow: String,

    /// Gold purity (24K, 22K, 21K, 18K, 14K)
    #[arg(short, long)]
    pub purity: Option<String>,

    /// Price per gram for the chosen purity
    #[arg(long)]
    pub price: Option<f64>,

    /// Price provider quote (JSON) to take the price from
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Width at the shank in mm; marks the band as tapered
    #[arg(long)]
    pub tapered_edge: Option<f64>,

    /// Lower bound of the width range in mm
    #[arg(long, requires = "width_max")]
    pub width_min: Option<f64>,

    /// Upper bound of the width range in mm
    #[arg(long, requires = "width_min")]
    pub width_max: Option<f64>,

    /// Fixed labor cost (defaults to the settings value)
    #[arg(long)]
    pub labor: Option<f64>,

    /// Estimator result (JSON) supplying width range and thickness
    #[arg(long)]
    pub estimate: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ValueArgs {
    /// Combine flags, estimator output, prices and settings into one input.
    ///
    /// Explicit flags win over the estimate; the estimate wins over settings.
    pub fn to_input(
        &self,
        settings: &ValuationSettings,
        estimate: Option<&RingEstimate>,
        prices: Option<&PriceTable>,
    ) -> CalcResult<ValuationInput> {
        if let Some(estimate) = estimate {
            estimate.validate()?;
        }

        let width_mm = self
            .width
            .or_else(|| estimate.map(RingEstimate::suggested_width_mm))
            .ok_or_else(|| CalcError::invalid_input("width", "missing", "Provide --width or --estimate"))?;

        let thickness_mm = self
            .thickness
            .or_else(|| estimate.map(|e| e.thickness_mm))
            .ok_or_else(|| {
                CalcError::invalid_input("thickness", "missing", "Provide --thickness or --estimate")
            })?;

        let range = match (self.width_min, self.width_max) {
            (Some(min), Some(max)) => Some(EstimateRange::new(min, max)),
            (None, None) => estimate.map(RingEstimate::range),
            _ => {
                return Err(CalcError::invalid_input(
                    "range",
                    "incomplete",
                    "Provide both --width-min and --width-max",
                ))
            }
        };

        let purity = match &self.purity {
            Some(p) => GoldPurity::from_str_flexible(p)?,
            None => settings.default_purity,
        };

        let profile = self
            .profile
            .as_deref()
            .map(RingProfile::from_label)
            .unwrap_or(settings.default_profile);

        let taper = match self.tapered_edge {
            Some(edge_width_mm) => Taper::Tapered { edge_width_mm },
            None => Taper::Uniform,
        };

        let price_per_gram = match (self.price, prices) {
            (Some(price), _) => price,
            (None, Some(table)) => price_or_fallback(table, purity, settings.fallback_price_per_gram),
            (None, None) => {
                tracing::warn!(
                    fallback = settings.fallback_price_per_gram,
                    "no price given, using fallback price per gram"
                );
                settings.fallback_price_per_gram
            }
        };

        Ok(ValuationInput {
            label: self.label.clone(),
            geometry: RingGeometry {
                size: self.size.clone().unwrap_or_else(|| settings.default_size.clone()),
                width_mm,
                thickness_mm,
                profile,
                taper,
            },
            hollow: HollowType::from_str_flexible(&self.hollow)?,
            material: MaterialSpec::new(purity, price_per_gram),
            labor_cost: self.labor.unwrap_or(settings.labor_cost),
            range,
        })
    }
}

/// Currency to report: the price source's if one was given, else the settings'
pub fn currency_for(settings: &ValuationSettings, prices: Option<&PriceTable>) -> String {
    prices
        .map(|p| p.currency().to_string())
        .unwrap_or_else(|| settings.currency.clone())
}
