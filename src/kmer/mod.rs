//! K-mer extraction from read sets.

pub mod extract;
