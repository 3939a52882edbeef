//! Named measurement units: the bodies the benchmark engine times.
//!
//! Each body performs one full trial on an already set-up fixture:
//! randomize, remove, clean up. The baseline does no removal so its cost can
//! be subtracted from the others.

use std::fmt;

use tracing::debug;

use crate::config::BenchConfig;
use crate::fixture::RemovalFixture;
use crate::removal::Algorithm;
use crate::rng::RngProvider;

/// Benchmark group every unit is registered under
pub const GROUP_NAME: &str = "vector_removal";

/// How a trial ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Completed,
    /// A size-gated algorithm declined a destination over the gate
    Skipped,
}

/// One registered benchmark body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Baseline,
    Removal(Algorithm),
}

impl Unit {
    /// All units in registration order, baseline first
    pub const ALL: [Unit; 7] = [
        Unit::Baseline,
        Unit::Removal(Algorithm::SwapPartition),
        Unit::Removal(Algorithm::EraseRemoveEach),
        Unit::Removal(Algorithm::RemoveShrinkingBound),
        Unit::Removal(Algorithm::SortSetDifference),
        Unit::Removal(Algorithm::FindRemoveIf),
        Unit::Removal(Algorithm::CountingMapRebuild),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Baseline => "baseline",
            Unit::Removal(algorithm) => algorithm.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.name() == name)
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, Unit::Baseline)
    }

    /// Run one trial on a fixture that has been [`set_up`](RemovalFixture::set_up)
    pub fn run<P: RngProvider>(
        &self,
        fixture: &mut RemovalFixture<P>,
        config: &BenchConfig,
    ) -> TrialOutcome {
        let algorithm = match self {
            Unit::Baseline => {
                fixture.randomize();
                fixture.cleanup();
                return TrialOutcome::Completed;
            }
            Unit::Removal(algorithm) => *algorithm,
        };

        if skip_gated(algorithm, fixture, config) {
            return TrialOutcome::Skipped;
        }

        fixture.randomize();
        let (destination, source) = fixture.split_mut();
        algorithm.apply(destination, source);
        fixture.cleanup();

        TrialOutcome::Completed
    }

    /// Like [`run`](Self::run), handing `observe` the randomized destination,
    /// the source and the destination after removal.
    ///
    /// The observer is not called for the baseline or for skipped trials.
    pub fn run_observed<P, F>(
        &self,
        fixture: &mut RemovalFixture<P>,
        config: &BenchConfig,
        mut observe: F,
    ) -> TrialOutcome
    where
        P: RngProvider,
        F: FnMut(&[i32], &[i32], &[i32]),
    {
        let Unit::Removal(algorithm) = *self else {
            return self.run(fixture, config);
        };

        if skip_gated(algorithm, fixture, config) {
            return TrialOutcome::Skipped;
        }

        fixture.randomize();
        let before = fixture.destination().to_vec();
        let (destination, source) = fixture.split_mut();
        algorithm.apply(destination, source);
        observe(&before, fixture.source(), fixture.destination());
        fixture.cleanup();

        TrialOutcome::Completed
    }
}

/// Clean up and report true when a gated algorithm declines this destination
fn skip_gated<P: RngProvider>(
    algorithm: Algorithm,
    fixture: &mut RemovalFixture<P>,
    config: &BenchConfig,
) -> bool {
    if !algorithm.is_size_gated() || !config.skips(fixture.destination().len()) {
        return false;
    }

    debug!(
        unit = algorithm.name(),
        destination_len = fixture.destination().len(),
        size_gate = config.size_gate,
        "trial skipped"
    );
    fixture.cleanup();
    true
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
