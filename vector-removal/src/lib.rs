//! # vector-removal - Batch Removal Benchmarks
//!
//! Fixtures and competing algorithms for measuring how fast a batch of
//! values can be removed from a vector.
//!
//! The experiment grid crosses six destination sizes with six source
//! fractions. For every grid point a [`RemovalFixture`] fills a destination
//! with random `i32`s and samples the source out of it, and each [`Unit`]
//! runs one trial over that data. The benchmark engine lives in a separate
//! crate and only calls into the hooks defined here.
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_removal::{Algorithm, BenchConfig, RemovalFixture, SeededRngProvider, Unit};
//!
//! let config = BenchConfig::default();
//! let mut fixture = RemovalFixture::with_provider(SeededRngProvider::new(7));
//!
//! fixture.set_up(0).unwrap();
//! let unit = Unit::Removal(Algorithm::SwapPartition);
//! unit.run_observed(&mut fixture, &config, |before, source, after| {
//!     assert!(after.len() <= before.len() - source.len());
//! });
//! assert!(fixture.destination().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod fixture;
pub mod removal;
pub mod rng;
pub mod space;
pub mod unit;
pub mod verify;

pub use config::{BenchConfig, ConfigError};
pub use error::{ExperimentError, VerifyError};
pub use fixture::RemovalFixture;
pub use removal::{
    Algorithm, Ordering, Semantics, counting_map_rebuild, erase_remove_each, find_remove_if,
    remove_shrinking_bound, sort_set_difference, swap_partition,
};
pub use rng::{
    ConfiguredRngProvider, EntropyRngProvider, RngProvider, RngStream, SeededRngProvider,
};
pub use space::{
    DESTINATION_SIZES, EXPERIMENT_COUNT, ExperimentCell, ExperimentPoint, ITERATIONS_PER_SAMPLE,
    SOURCE_FRACTIONS, experiment_values, source_len_for,
};
pub use unit::{GROUP_NAME, TrialOutcome, Unit};
