//! # Norsh Crypto Benchmarks

pub mod signature;
