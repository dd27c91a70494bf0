pub mod fastpow;
