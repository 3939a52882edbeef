//! Per-trial destination and source vectors.

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::error::ExperimentError;
use crate::rng::{EntropyRngProvider, RngProvider, RngStream};
use crate::space::ExperimentCell;

/// Holds the two vectors a removal trial works on.
///
/// The lifecycle of one trial is `set_up` → `randomize` → removal →
/// `cleanup`. Storage is reused between trials; values never are.
#[derive(Debug, Clone)]
pub struct RemovalFixture<P: RngProvider = EntropyRngProvider> {
    destination: Vec<i32>,
    source: Vec<i32>,
    provider: P,
}

impl RemovalFixture<EntropyRngProvider> {
    /// Create a fixture seeded from operating system entropy
    pub fn new() -> Self {
        Self::with_provider(EntropyRngProvider)
    }
}

impl Default for RemovalFixture<EntropyRngProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RngProvider> RemovalFixture<P> {
    /// Create a fixture drawing its generators from `provider`
    pub fn with_provider(provider: P) -> Self {
        Self {
            destination: Vec::new(),
            source: Vec::new(),
            provider,
        }
    }

    /// Size both vectors for one experiment point
    pub fn set_up(&mut self, experiment_index: usize) -> Result<(), ExperimentError> {
        let cell = ExperimentCell::decode(experiment_index)?;
        self.set_up_cell(&cell);
        Ok(())
    }

    /// Size both vectors for an already decoded experiment point
    pub fn set_up_cell(&mut self, cell: &ExperimentCell) {
        self.resize(cell.destination_len(), cell.source_len());
        debug!(
            experiment_index = cell.index(),
            destination_len = self.destination.len(),
            source_len = self.source.len(),
            "fixture set up"
        );
    }

    /// Size both vectors directly, zero-filling new slots
    pub fn resize(&mut self, destination_len: usize, source_len: usize) {
        self.destination.resize(destination_len, 0);
        self.source.resize(source_len, 0);
    }

    /// Fill the destination with random values, then sample the source from it.
    ///
    /// Values are uniform over the whole `i32` range. The source is a uniform
    /// sample without replacement whose elements keep their destination
    /// order. If the source is longer than the destination it is shortened
    /// to fit, so sampling an empty destination leaves an empty source.
    pub fn randomize(&mut self) {
        let mut values = self.provider.create_rng(RngStream::Values);
        for slot in self.destination.iter_mut() {
            *slot = values.gen_range(i32::MIN..=i32::MAX);
        }

        let amount = self.source.len().min(self.destination.len());
        let mut sample = self.provider.create_rng(RngStream::Sample);
        let mut picked = index::sample(&mut sample, self.destination.len(), amount).into_vec();
        picked.sort_unstable();

        let destination = &self.destination;
        self.source.clear();
        self.source.extend(picked.into_iter().map(|i| destination[i]));
    }

    /// Empty both vectors, keeping their allocations
    pub fn cleanup(&mut self) {
        self.destination.clear();
        self.source.clear();
    }

    pub fn destination(&self) -> &[i32] {
        &self.destination
    }

    pub fn source(&self) -> &[i32] {
        &self.source
    }

    /// Borrow the destination mutably alongside the source
    pub fn split_mut(&mut self) -> (&mut Vec<i32>, &[i32]) {
        (&mut self.destination, &self.source)
    }
}
