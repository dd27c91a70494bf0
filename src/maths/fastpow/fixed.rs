//! Fixed small powers: x^2, x^3, x^4.
//!
//! Each is a fixed multiplication chain with no branch on the exponent. NaN
//! and infinities propagate through the multiplications unchanged: -inf goes
//! to +inf for even powers and stays -inf for the cube. Signed zero follows
//! the same parity rule.

#[inline(always)]
pub fn square(x: f64) -> f64 {
    x * x
}

#[inline(always)]
pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// x^4 as the square of the square.
///
/// Two multiplications instead of three. The rounding matches `powi(x, 4)`,
/// which squares twice as well; it can differ by an ulp from `((x*x)*x)*x`.
#[inline(always)]
pub fn pow4(x: f64) -> f64 {
    let x2 = square(x);
    x2 * x2
}
