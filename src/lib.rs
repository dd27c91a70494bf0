#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::fastpow;
pub use maths::fastpow::{FastPow, cube, pow4, powi, powi64, square};
