//! Pseudo-random sources
//!
//! Uses the `rand` crate. `PseudoSource` draws from the thread-local RNG;
//! `SeededSource` is deterministic for a given seed.

use crate::error::{Error, Result};
use crate::rng::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Mutex, MutexGuard};

/// Thread-local pseudo-random source
pub struct PseudoSource {
    _phantom: std::marker::PhantomData<()>,
}

impl PseudoSource {
    /// Create a new pseudo-random source
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for PseudoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn description(&self) -> &'static str {
        "Thread-local pseudo-random number generator"
    }

    fn bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; n];
        rand::thread_rng().fill_bytes(&mut bytes);
        Ok(bytes)
    }

    fn float(&self) -> Result<f64> {
        Ok(rand::thread_rng().gen::<f64>())
    }

    // Override for efficiency - generate all floats at once
    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = rand::thread_rng();
        Ok((0..n).map(|_| rng.gen::<f64>()).collect())
    }
}

/// Seeded pseudo-random source for reproducible runs
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StdRng>> {
        self.rng
            .lock()
            .map_err(|_| Error::Rng("seeded source lock poisoned".to_string()))
    }
}

impl RandomSource for SeededSource {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn description(&self) -> &'static str {
        "Seeded pseudo-random number generator (reproducible output)"
    }

    fn bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; n];
        self.lock()?.fill_bytes(&mut bytes);
        Ok(bytes)
    }

    fn float(&self) -> Result<f64> {
        Ok(self.lock()?.gen::<f64>())
    }

    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = self.lock()?;
        Ok((0..n).map(|_| rng.gen::<f64>()).collect())
    }
}
