//! The experiment grid: destination sizes crossed with source fractions.
//!
//! Every experiment point is identified by a single index in `0..36`. The
//! index is row-major over the two lookup tables, so the destination size
//! varies slowest:
//!
//! ```text
//! index = size_bucket * SOURCE_FRACTIONS.len() + fraction_bucket
//! ```
//!
//! Each point carries an iteration count that shrinks as the destination
//! grows, so that every point costs roughly the same wall-clock time.

use crate::error::ExperimentError;

/// Destination lengths, one per size bucket
pub const DESTINATION_SIZES: [usize; 6] = [10, 100, 1_000, 10_000, 20_000, 200_000];

/// Fraction of the destination sampled into the source, one per fraction bucket
pub const SOURCE_FRACTIONS: [f64; 6] = [0.01, 0.1, 0.2, 0.4, 0.6, 0.8];

/// Trials per measured sample, indexed by size bucket
pub const ITERATIONS_PER_SAMPLE: [u64; 6] = [1_000, 1_000, 200, 30, 20, 5];

/// Total number of experiment points in the grid
pub const EXPERIMENT_COUNT: usize = DESTINATION_SIZES.len() * SOURCE_FRACTIONS.len();

/// One decoded grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExperimentCell {
    pub size_bucket: usize,
    pub fraction_bucket: usize,
}

impl ExperimentCell {
    /// Decode an experiment index into its size and fraction buckets
    pub fn decode(index: usize) -> Result<Self, ExperimentError> {
        if index >= EXPERIMENT_COUNT {
            return Err(ExperimentError::IndexOutOfRange {
                index,
                len: EXPERIMENT_COUNT,
            });
        }

        Ok(Self {
            size_bucket: index / SOURCE_FRACTIONS.len(),
            fraction_bucket: index % SOURCE_FRACTIONS.len(),
        })
    }

    /// The experiment index this cell encodes
    pub fn index(&self) -> usize {
        self.size_bucket * SOURCE_FRACTIONS.len() + self.fraction_bucket
    }

    pub fn destination_len(&self) -> usize {
        DESTINATION_SIZES[self.size_bucket]
    }

    pub fn fraction(&self) -> f64 {
        SOURCE_FRACTIONS[self.fraction_bucket]
    }

    pub fn source_len(&self) -> usize {
        source_len_for(self.destination_len(), self.fraction())
    }

    pub fn iterations(&self) -> u64 {
        ITERATIONS_PER_SAMPLE[self.size_bucket]
    }
}

/// Source length for a destination of `destination_len` elements.
///
/// Rounds to the nearest element with a floor of one, so tiny destinations
/// still remove something.
pub fn source_len_for(destination_len: usize, fraction: f64) -> usize {
    let scaled = (destination_len as f64 * fraction).round() as usize;
    scaled.max(1)
}

/// One entry of the experiment space handed to the measurement engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExperimentPoint {
    pub index: usize,
    pub iterations: u64,
}

impl ExperimentPoint {
    /// Decoded grid coordinate for this point.
    ///
    /// Points produced by [`experiment_values`] always decode.
    pub fn cell(&self) -> Result<ExperimentCell, ExperimentError> {
        ExperimentCell::decode(self.index)
    }
}

/// Enumerate all experiment points in row-major order
pub fn experiment_values() -> Vec<ExperimentPoint> {
    (0..EXPERIMENT_COUNT)
        .map(|index| ExperimentPoint {
            index,
            iterations: ITERATIONS_PER_SAMPLE[index / SOURCE_FRACTIONS.len()],
        })
        .collect()
}
