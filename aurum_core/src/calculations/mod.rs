//! # Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `compute(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`valuation`] - Ring gold volume, mass and price

pub mod valuation;

pub use valuation::{
    compute, evaluate, CalculationResult, Valuation, ValuationInput, ValuationRange, WidthValuation,
    LABOR_COST, SOLDER_BUFFER,
};

/// Fraction digits that always cover the exact decimal expansion of an f64
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to a fixed number of decimal places (half away from zero).
///
/// Rounds the exact binary value, not its shortest decimal spelling:
/// `1.115` is stored as 1.11499999... and rounds to `1.11`.
/// Only applied to values leaving the engine; intermediate steps keep full precision.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = places as usize;
    let exact = format!("{:.*}", places + EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    let round_up = frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let int_digits: String = digits[..split].iter().map(|&d| d as char).collect();
    let frac_digits: String = digits[split..].iter().map(|&d| d as char).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = if places == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    };
    text.parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(796.4157053587958, 2), 796.42);
        assert_eq!(round_to(0.09721238877942234, 3), 0.097);
        assert_eq!(round_to(1.6856628214351834, 2), 1.69);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        // 1.115 and 9.995 are stored just below the halfway point
        assert_eq!(round_to(1.115, 2), 1.11);
        assert_eq!(round_to(9.995, 2), 9.99);
        assert_eq!(round_to(1.005, 2), 1.0);
        // 0.125 is exactly representable, so it is a true tie
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }

    #[test]
    fn test_round_to_carries() {
        assert_eq!(round_to(9.9951, 2), 10.0);
        assert_eq!(round_to(99.5, 0), 100.0);
        assert_eq!(round_to(0.0004, 3), 0.0);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
