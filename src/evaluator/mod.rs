//! Evaluation context shared by operator implementations

pub mod error;

pub use error::{EvaluationError, EvaluationResult};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::config::RegistryConfig;
use crate::registry::host::ArrayQuerySerializer;

/// Context for operator evaluation
///
/// Borrowed from the registry for the duration of a single call.
pub struct EvaluationContext<'a> {
    /// Registry configuration
    pub config: &'a RegistryConfig,
    /// Serializer used by `arrayAsQueryStr`
    pub serializer: &'a dyn ArrayQuerySerializer,
    /// Random source used by `arrayRandom`
    pub random: &'a RandomSource,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context
    pub fn new(
        config: &'a RegistryConfig,
        serializer: &'a dyn ArrayQuerySerializer,
        random: &'a RandomSource,
    ) -> Self {
        Self {
            config,
            serializer,
            random,
        }
    }
}

/// Source of randomness for `arrayRandom`
///
/// The unseeded variant uses the thread-local generator; the seeded variant
/// shares one generator behind a mutex so draws are reproducible.
#[derive(Debug)]
pub enum RandomSource {
    /// Thread-local generator
    ThreadLocal,
    /// Seeded generator shared across threads
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    /// Create a source from an optional seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => Self::ThreadLocal,
        }
    }

    /// Pick a uniformly distributed index in `0..len`; `len` must be non-zero
    pub fn pick_index(&self, len: usize) -> usize {
        match self {
            Self::ThreadLocal => rand::rng().random_range(0..len),
            Self::Seeded(rng) => rng.lock().random_range(0..len),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::ThreadLocal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let first = RandomSource::from_seed(Some(42));
        let second = RandomSource::from_seed(Some(42));
        let a: Vec<usize> = (0..16).map(|_| first.pick_index(10)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.pick_index(10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let source = RandomSource::default();
        for _ in 0..64 {
            assert!(source.pick_index(3) < 3);
        }
    }
}
