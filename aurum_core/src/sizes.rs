//! Standard Ring Sizes
//!
//! Ring sizes are labelled by their inner circumference in millimetres
//! (ISO 8653 style), from 40 to 75 in 1 mm steps. The label is what a
//! customer or jeweller quotes; the lookup turns it into the inner
//! circumference used by the volume formula.
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::sizes::circumference_mm;
//!
//! assert_eq!(circumference_mm("52").unwrap(), 52.0);
//! assert!(circumference_mm("39").is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Size label to inner circumference (mm)
pub const RING_SIZES: [(&str, f64); 36] = [
    ("40", 40.0),
    ("41", 41.0),
    ("42", 42.0),
    ("43", 43.0),
    ("44", 44.0),
    ("45", 45.0),
    ("46", 46.0),
    ("47", 47.0),
    ("48", 48.0),
    ("49", 49.0),
    ("50", 50.0),
    ("51", 51.0),
    ("52", 52.0),
    ("53", 53.0),
    ("54", 54.0),
    ("55", 55.0),
    ("56", 56.0),
    ("57", 57.0),
    ("58", 58.0),
    ("59", 59.0),
    ("60", 60.0),
    ("61", 61.0),
    ("62", 62.0),
    ("63", 63.0),
    ("64", 64.0),
    ("65", 65.0),
    ("66", 66.0),
    ("67", 67.0),
    ("68", 68.0),
    ("69", 69.0),
    ("70", 70.0),
    ("71", 71.0),
    ("72", 72.0),
    ("73", 73.0),
    ("74", 74.0),
    ("75", 75.0),
];

/// Size preselected when nothing else is known
pub const DEFAULT_SIZE: &str = "52";

/// Resolve a size label to its inner circumference in millimetres.
///
/// Surrounding whitespace is ignored; anything else must match a label exactly.
pub fn circumference_mm(label: &str) -> CalcResult<f64> {
    let key = label.trim();
    RING_SIZES
        .iter()
        .find(|(l, _)| *l == key)
        .map(|(_, mm)| *mm)
        .ok_or_else(|| {
            CalcError::invalid_size_key(label, RING_SIZES[0].0, RING_SIZES[RING_SIZES.len() - 1].0)
        })
}

/// Whether a label is in the table
pub fn is_known(label: &str) -> bool {
    circumference_mm(label).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_40_to_75() {
        assert_eq!(RING_SIZES.len(), 36);
        for (i, (label, mm)) in RING_SIZES.iter().enumerate() {
            let expected = 40.0 + i as f64;
            assert_eq!(*mm, expected);
            assert_eq!(label.parse::<f64>().unwrap(), expected);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(circumference_mm("40").unwrap(), 40.0);
        assert_eq!(circumference_mm("75").unwrap(), 75.0);
        assert_eq!(circumference_mm(" 60 ").unwrap(), 60.0);
    }

    #[test]
    fn test_unknown_labels() {
        for bad in ["39", "76", "", "52.5", "052", "abc"] {
            let err = circumference_mm(bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_SIZE_KEY");
        }
    }

    #[test]
    fn test_default_size_is_known() {
        assert!(is_known(DEFAULT_SIZE));
        assert!(!is_known("76"));
    }
}
