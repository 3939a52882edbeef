//! Criterion integration for the vector-removal benchmark units.
//!
//! Every [`Unit`] is registered once per experiment point under a single
//! benchmark group. For each measured iteration the adapter sets the fixture
//! up for the point, then runs as many trials as the point's iteration count
//! asks for. Only the unit bodies are timed and the reported figure is the
//! mean time of one trial, so points with different iteration counts stay
//! comparable.
//!
//! # Example
//!
//! ```rust,no_run
//! use criterion::{Criterion, criterion_group, criterion_main};
//! use vector_removal::{BenchConfig, Unit};
//! use vector_removal_criterion::RemovalBencher;
//!
//! fn bench_all(c: &mut Criterion) {
//!     let config = BenchConfig::default();
//!     c.bench_removal_units(&Unit::ALL, &config).unwrap();
//! }
//!
//! criterion_group!(benches, bench_all);
//! criterion_main!(benches);
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vector_removal::{
    BenchConfig, ConfiguredRngProvider, ExperimentCell, ExperimentError, ExperimentPoint,
    GROUP_NAME, RemovalFixture, RngProvider, Unit, experiment_values,
};

/// Extension trait registering removal units on a [`Criterion`] instance
pub trait RemovalBencher {
    /// Register `units` for every experiment point under one group
    fn bench_removal_units(
        &mut self,
        units: &[Unit],
        config: &BenchConfig,
    ) -> Result<(), ExperimentError>;
}

impl RemovalBencher for Criterion {
    fn bench_removal_units(
        &mut self,
        units: &[Unit],
        config: &BenchConfig,
    ) -> Result<(), ExperimentError> {
        let mut group = self.benchmark_group(GROUP_NAME);
        group.sample_size(config.sample_size);

        for &unit in units {
            for point in experiment_values() {
                group.bench_removal_point(unit, point, config)?;
            }
        }

        group.finish();
        Ok(())
    }
}

/// Extension trait registering one unit at one point within a group
pub trait RemovalBenchmarkGroup {
    fn bench_removal_point(
        &mut self,
        unit: Unit,
        point: ExperimentPoint,
        config: &BenchConfig,
    ) -> Result<(), ExperimentError>;
}

impl RemovalBenchmarkGroup for BenchmarkGroup<'_, WallTime> {
    fn bench_removal_point(
        &mut self,
        unit: Unit,
        point: ExperimentPoint,
        config: &BenchConfig,
    ) -> Result<(), ExperimentError> {
        let cell = point.cell()?;
        debug!(
            unit = unit.name(),
            experiment_index = point.index,
            iterations = point.iterations,
            "registering benchmark"
        );

        let mut fixture =
            RemovalFixture::with_provider(ConfiguredRngProvider::from_seed(config.seed));

        self.throughput(Throughput::Elements(cell.destination_len() as u64));
        self.bench_with_input(
            BenchmarkId::new(unit.name(), point.index),
            &cell,
            |b, cell| {
                b.iter_custom(|iters| {
                    measure_trials(&mut fixture, unit, cell, point.iterations, config, iters)
                })
            },
        );
        Ok(())
    }
}

/// Run `iters` rounds of `trials` unit bodies, returning the summed body
/// time divided by `trials`.
///
/// Fixture set-up before each trial is excluded from the measurement.
pub fn measure_trials<P: RngProvider>(
    fixture: &mut RemovalFixture<P>,
    unit: Unit,
    cell: &ExperimentCell,
    trials: u64,
    config: &BenchConfig,
    iters: u64,
) -> Duration {
    let trials = trials.max(1);
    let mut elapsed = Duration::ZERO;

    for _ in 0..iters {
        for _ in 0..trials {
            fixture.set_up_cell(cell);
            let start = Instant::now();
            black_box(unit.run(fixture, config));
            elapsed += start.elapsed();
        }
    }

    elapsed.div_f64(trials as f64)
}

/// Install a `tracing` subscriber honouring `RUST_LOG`, defaulting to `warn`.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
