//! Benchmark configuration.

use std::env;

/// Environment variable overriding [`BenchConfig::size_gate`]
pub const SIZE_GATE_ENV: &str = "VECTOR_REMOVAL_SIZE_GATE";
/// Environment variable fixing [`BenchConfig::seed`]
pub const SEED_ENV: &str = "VECTOR_REMOVAL_SEED";
/// Environment variable overriding [`BenchConfig::sample_size`]
pub const SAMPLE_SIZE_ENV: &str = "VECTOR_REMOVAL_SAMPLE_SIZE";

/// Smallest sample size the measurement engine accepts
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Size gate could not be parsed as an element count
    InvalidSizeGate(String),
    /// Seed could not be parsed as a 64-bit integer
    InvalidSeed(String),
    /// Sample size could not be parsed as a count
    InvalidSampleSize(String),
    /// Sample size below [`MIN_SAMPLE_SIZE`]
    SampleSizeTooSmall(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSizeGate(raw) => {
                write!(f, "Invalid size gate: {:?} (expected an element count)", raw)
            }
            ConfigError::InvalidSeed(raw) => {
                write!(f, "Invalid seed: {:?} (expected an unsigned 64-bit integer)", raw)
            }
            ConfigError::InvalidSampleSize(raw) => {
                write!(f, "Invalid sample size: {:?} (expected a count)", raw)
            }
            ConfigError::SampleSizeTooSmall(n) => {
                write!(
                    f,
                    "Invalid sample size: {} (must be >= {})",
                    n, MIN_SAMPLE_SIZE
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Knobs shared by the bench target and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Quadratic algorithms skip destinations longer than this
    pub size_gate: usize,
    /// Fixed seed for reproducible fixtures, entropy when absent
    pub seed: Option<u64>,
    /// Samples collected per benchmark
    pub sample_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size_gate: 10_000,
            seed: None,
            sample_size: 100,
        }
    }
}

impl BenchConfig {
    /// Create a new configuration with validation
    pub fn new(size_gate: usize, seed: Option<u64>, sample_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            size_gate,
            seed,
            sample_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(ConfigError::SampleSizeTooSmall(self.sample_size));
        }
        Ok(())
    }

    /// Start from the defaults and apply any `VECTOR_REMOVAL_*` overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SIZE_GATE_ENV) {
            config.size_gate = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSizeGate(raw.clone()))?;
        }

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(SAMPLE_SIZE_ENV) {
            config.sample_size = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSampleSize(raw.clone()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_size_gate(mut self, size_gate: usize) -> Self {
        self.size_gate = size_gate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Whether a size-gated algorithm should skip a destination of this length
    pub fn skips(&self, destination_len: usize) -> bool {
        destination_len > self.size_gate
    }
}
