//! # Market Prices
//!
//! The live price feed is an external collaborator. This module holds what
//! the engine needs from it: a price per gram for each purity grade.
//!
//! [`PriceSource`] is the seam; [`PriceTable`] is the in-memory
//! implementation, built by hand or from a [`GoldApiQuote`] (the JSON a
//! spot-price provider returns for one metal/currency pair).
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::materials::GoldPurity;
//! use aurum_core::pricing::{PriceSource, PriceTable};
//!
//! let table = PriceTable::new("AED").with_price(GoldPurity::K21, 250.0);
//! assert_eq!(table.price_per_gram(GoldPurity::K21).unwrap(), 250.0);
//! assert!(table.price_per_gram(GoldPurity::K18).is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::GoldPurity;

/// Anything that can quote a price per gram for a purity grade.
pub trait PriceSource {
    /// Price per gram in the source's currency
    fn price_per_gram(&self, purity: GoldPurity) -> CalcResult<f64>;

    /// ISO currency code of the quoted prices
    fn currency(&self) -> &str;
}

/// Spot quote payload from the price provider.
///
/// Only the per-gram fields are used; 10K is quoted by the provider but has
/// no matching purity grade here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldApiQuote {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub metal: String,
    pub currency: String,
    #[serde(default)]
    pub price: f64,
    pub price_gram_24k: f64,
    pub price_gram_22k: f64,
    pub price_gram_21k: f64,
    pub price_gram_18k: f64,
    pub price_gram_14k: f64,
    #[serde(default)]
    pub price_gram_10k: Option<f64>,
}

/// Price per gram for each purity grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// ISO currency code
    pub currency: String,
    /// Quoted prices per gram
    pub prices: BTreeMap<GoldPurity, f64>,
}

impl PriceTable {
    /// Empty table in the given currency
    pub fn new(currency: impl Into<String>) -> Self {
        PriceTable {
            currency: currency.into(),
            prices: BTreeMap::new(),
        }
    }

    /// Add or replace one price (builder style)
    pub fn with_price(mut self, purity: GoldPurity, price_per_gram: f64) -> Self {
        self.prices.insert(purity, price_per_gram);
        self
    }

    /// Build a table from a provider quote
    pub fn from_quote(quote: &GoldApiQuote) -> Self {
        PriceTable::new(quote.currency.clone())
            .with_price(GoldPurity::K24, quote.price_gram_24k)
            .with_price(GoldPurity::K22, quote.price_gram_22k)
            .with_price(GoldPurity::K21, quote.price_gram_21k)
            .with_price(GoldPurity::K18, quote.price_gram_18k)
            .with_price(GoldPurity::K14, quote.price_gram_14k)
    }

    /// Parse a provider quote from JSON and build a table
    pub fn from_quote_json(json: &str) -> CalcResult<Self> {
        let quote: GoldApiQuote =
            serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
                reason: format!("Invalid price quote: {}", e),
            })?;
        Ok(PriceTable::from_quote(&quote))
    }
}

impl PriceSource for PriceTable {
    fn price_per_gram(&self, purity: GoldPurity) -> CalcResult<f64> {
        match self.prices.get(&purity) {
            Some(&price) if price.is_finite() && price > 0.0 => Ok(price),
            Some(&price) => Err(CalcError::price_unavailable(
                purity.code(),
                format!("quoted price {} is not positive", price),
            )),
            None => Err(CalcError::price_unavailable(purity.code(), "not quoted")),
        }
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

/// Look up a price, falling back to a fixed figure when the source has none.
pub fn price_or_fallback(source: &dyn PriceSource, purity: GoldPurity, fallback: f64) -> f64 {
    match source.price_per_gram(purity) {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!(%purity, fallback, error = %e, "market price unavailable, using fallback");
            fallback
        }
    }
}
