//! powi(x, n): x raised to a signed integer power.
//!
//! Exponentiation by squaring over |n|, then one division for negative n.
//! The magnitude is taken with `unsigned_abs`, so `i32::MIN` and `i64::MIN`
//! need no special case.
//!
//! Special values come straight out of the arithmetic:
//! - n == 0 returns 1.0 for every x, NaN included.
//! - NaN stays NaN for n != 0.
//! - +-0 with n < 0 goes to +-inf through 1/0, with the sign of x^|n|.
//! - +-inf with n < 0 goes to +-0 through 1/inf.
//!
//! When x^|n| overflows, a negative exponent returns 0 even if the true
//! result is subnormal. `f64::powi` does the same.

use super::{pow_magnitude, recip};

#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let r = pow_magnitude(x, n.unsigned_abs() as u64);
    if n < 0 { recip(r) } else { r }
}

/// Same as [`powi`] for exponents outside the `i32` range.
#[inline]
pub fn powi64(x: f64, n: i64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let r = pow_magnitude(x, n.unsigned_abs());
    if n < 0 { recip(r) } else { r }
}
