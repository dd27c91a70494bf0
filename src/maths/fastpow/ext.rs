use super::{cube, pow4, powi, square};

/// Method-call form of the fastpow routines.
///
/// `powi_fast` is named so it never collides with the inherent `f64::powi`.
pub trait FastPow: Sized {
    fn square(self) -> Self;
    fn cube(self) -> Self;
    fn pow4(self) -> Self;
    fn powi_fast(self, n: i32) -> Self;
}

impl FastPow for f64 {
    #[inline(always)]
    fn square(self) -> f64 {
        square(self)
    }

    #[inline(always)]
    fn cube(self) -> f64 {
        cube(self)
    }

    #[inline(always)]
    fn pow4(self) -> f64 {
        pow4(self)
    }

    #[inline(always)]
    fn powi_fast(self, n: i32) -> f64 {
        powi(self, n)
    }
}
