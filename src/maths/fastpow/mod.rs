//! Integer powers of `f64` without going through a general `pow`.
//!
//! Fixed exponents 2, 3 and 4 are straight-line multiplication chains. Any
//! other integer exponent goes through exponentiation by squaring. Results
//! are plain IEEE products: no FMA contraction and no compensated arithmetic,
//! so they agree bit-for-bit with `f64::powi`.

mod ext;
mod fixed;
mod powi;

pub use ext::FastPow;
pub use fixed::{cube, pow4, square};
pub use powi::{powi, powi64};

// ========= shared helpers =========

/// Square-and-multiply over the magnitude of the exponent.
///
/// The running base is only squared while bits remain, so no multiplication
/// is spent on a value that is never consumed. `e == 0` yields 1.0.
#[inline(always)]
fn pow_magnitude(x: f64, mut e: u64) -> f64 {
    let mut acc = 1.0;
    let mut base = x;
    loop {
        if (e & 1) != 0 {
            acc *= base;
        }
        e >>= 1;
        if e == 0 {
            return acc;
        }
        base *= base;
    }
}

#[inline(always)]
fn recip(x: f64) -> f64 {
    1.0 / x
}
