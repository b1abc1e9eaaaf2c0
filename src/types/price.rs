//! Fixed-point price and quantity utilities.
//!
//! ## Overview
//!
//! All prices and quantities are stored as u64 scaled by 10^8, so 8 decimal
//! places are carried without floating-point error. Fixed-point keys also
//! guarantee stable equality across an order's lifetime, which the price
//! aggregation maps rely on.
//!
//! ## Examples
//!
//! ```
//! use tickmatch::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("100.50000000").unwrap();
//! assert_eq!(price, 10_050_000_000);
//! assert_eq!(from_fixed(price), "100.50000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: u64 = 100_000_000;

/// Largest whole value representable after scaling (u64::MAX / SCALE)
pub const MAX_VALUE: u64 = u64::MAX / SCALE;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64.
///
/// Returns `None` if parsing fails, the value is negative, or it is out of
/// range.
///
/// # Example
///
/// ```
/// use tickmatch::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("100.5"), Some(10_050_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` to fixed-point u64.
///
/// Returns `None` for negative or out-of-range values.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert fixed-point u64 to a `Decimal`
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places.
///
/// # Example
///
/// ```
/// use tickmatch::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(10_050_000_000), "100.50000000");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Convert fixed-point u64 to a human-readable string (trailing zeros trimmed).
///
/// # Example
///
/// ```
/// use tickmatch::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(10_050_000_000), "100.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    format!("{}", fixed_to_decimal(value).normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================
