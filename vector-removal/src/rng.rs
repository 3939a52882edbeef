//! Seed providers for fixture randomization.
//!
//! Every call to [`RemovalFixture::randomize`](crate::fixture::RemovalFixture::randomize)
//! asks its provider for two generators: one that fills the destination and
//! one that samples the source out of it. Benchmarks use fresh entropy for
//! both; tests swap in a fixed seed and get the same data every time.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Which of the two per-trial random streams is being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RngStream {
    /// Destination values
    Values,
    /// Source sampling
    Sample,
}

impl RngStream {
    /// Mixed into a fixed base seed so the two streams never coincide
    fn salt(self) -> u64 {
        match self {
            RngStream::Values => 0x0000_0000_0000_0000,
            RngStream::Sample => 0x9E37_79B9_7F4A_7C15,
        }
    }
}

impl fmt::Display for RngStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngStream::Values => write!(f, "values"),
            RngStream::Sample => write!(f, "sample"),
        }
    }
}

/// Trait for providing random number generators
pub trait RngProvider {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore;

    /// Create the generator for one stream of one trial
    fn create_rng(&self, stream: RngStream) -> Self::Rng;
}

/// Seeds every generator from operating system entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyRngProvider;

impl RngProvider for EntropyRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, _stream: RngStream) -> Self::Rng {
        StdRng::from_entropy()
    }
}

/// Derives every generator from one base seed.
///
/// The two streams get distinct seeds, but each stream yields the same
/// sequence on every trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRngProvider {
    base_seed: u64,
}

impl SeededRngProvider {
    /// Create a new seeded provider
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }
}

impl RngProvider for SeededRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, stream: RngStream) -> Self::Rng {
        StdRng::seed_from_u64(self.base_seed ^ stream.salt())
    }
}

/// Either kind of provider, chosen at runtime from configuration
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredRngProvider {
    Entropy(EntropyRngProvider),
    Seeded(SeededRngProvider),
}

impl ConfiguredRngProvider {
    /// Fixed seed if one is given, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredRngProvider::Seeded(SeededRngProvider::new(seed)),
            None => ConfiguredRngProvider::Entropy(EntropyRngProvider),
        }
    }
}

impl RngProvider for ConfiguredRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, stream: RngStream) -> Self::Rng {
        match self {
            ConfiguredRngProvider::Entropy(provider) => provider.create_rng(stream),
            ConfiguredRngProvider::Seeded(provider) => provider.create_rng(stream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_provider_is_reproducible() {
        let provider = SeededRngProvider::new(12345);

        let mut rng1 = provider.create_rng(RngStream::Values);
        let mut rng2 = provider.create_rng(RngStream::Values);

        let val1: u64 = rng1.r#gen();
        let val2: u64 = rng2.r#gen();
        assert_eq!(val1, val2);
    }

    #[test]
    fn test_seeded_streams_are_independent() {
        let provider = SeededRngProvider::new(777);

        let mut values = provider.create_rng(RngStream::Values);
        let mut sample = provider.create_rng(RngStream::Sample);

        let first: [u64; 4] = values.r#gen();
        let second: [u64; 4] = sample.r#gen();
        assert_ne!(first, second);
    }

    #[test]
    fn test_entropy_provider_produces_values() {
        let provider = EntropyRngProvider;
        let mut rng = provider.create_rng(RngStream::Sample);
        let value = rng.gen_range(0..10u32);
        assert!(value < 10);
    }

    #[test]
    fn test_configured_provider_from_seed() {
        let configured = ConfiguredRngProvider::from_seed(Some(42));
        let seeded = SeededRngProvider::new(42);

        let mut rng1 = configured.create_rng(RngStream::Values);
        let mut rng2 = seeded.create_rng(RngStream::Values);

        let val1: u32 = rng1.r#gen();
        let val2: u32 = rng2.r#gen();
        assert_eq!(val1, val2);

        assert!(matches!(
            ConfiguredRngProvider::from_seed(None),
            ConfiguredRngProvider::Entropy(_)
        ));
    }

    #[test]
    fn test_stream_display() {
        assert_eq!(RngStream::Values.to_string(), "values");
        assert_eq!(RngStream::Sample.to_string(), "sample");
    }
}
