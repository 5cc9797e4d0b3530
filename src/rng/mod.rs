//! Random number sources
//!
//! Every random draw in the crate goes through a `RandomSource` handle that
//! callers pass in explicitly. There is no global random state: tests and
//! `--seed` runs inject a `SeededSource` to get reproducible output.

pub mod pseudo;

use crate::error::{Error, Result};

/// Trait for random number sources
///
/// Implementations must be thread-safe (Send + Sync).
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "pseudo", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Generate n random bytes
    fn bytes(&self, n: usize) -> Result<Vec<u8>>;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    ///
    /// Default implementation uses 4 bytes to create a u32, then divides by 2^32.
    fn float(&self) -> Result<f64> {
        let bytes = self.bytes(4)?;
        let u = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        Ok(u as f64 / 4_294_967_296.0)
    }

    /// Generate n random floats, each uniformly distributed in [0.0, 1.0)
    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        let bytes = self.bytes(n * 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]]) as f64 / 4_294_967_296.0)
            .collect())
    }
}

/// Uniform integer in `[0, n)`
pub fn below(rng: &dyn RandomSource, n: u64) -> Result<u64> {
    if n == 0 {
        return Err(Error::Rng("cannot draw below zero".to_string()));
    }
    let value = (rng.float()? * n as f64) as u64;
    // float() is strictly below 1.0 but the product can still round up to n
    Ok(value.min(n - 1))
}

/// Uniform integer in `[lo, hi)`
pub fn range(rng: &dyn RandomSource, lo: u64, hi: u64) -> Result<u64> {
    if hi <= lo {
        return Err(Error::Rng(format!("empty range {}..{}", lo, hi)));
    }
    Ok(lo + below(rng, hi - lo)?)
}

/// Pick one element of a non-empty slice
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Result<&'a T> {
    let index = below(rng, items.len() as u64)
        .map_err(|_| Error::Rng("cannot choose from an empty list".to_string()))?;
    Ok(&items[index as usize])
}

/// Get a random source: seeded when a seed is given, thread RNG otherwise
pub fn get_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededSource::new(seed)),
        None => Box::new(pseudo::PseudoSource::new()),
    }
}
