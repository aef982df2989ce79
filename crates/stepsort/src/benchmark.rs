use std::time::Duration;

use crate::engine::SortEngine;
use crate::error::SortError;
use crate::threshold::size_threshold;
use crate::{EngineConfig, SortingAlgorithm};

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    pub algorithm: SortingAlgorithm,
    pub runs: usize,
    pub outcome: BenchmarkOutcome,
}

#[derive(Clone, Debug)]
pub enum BenchmarkOutcome {
    Completed(BenchmarkAggregate),
    Skipped(SkipReason),
}

#[derive(Clone, Debug)]
pub enum SkipReason {
    /// The threshold guard rejected the input before any engine ran.
    OverThreshold { size: usize, limit: usize },
    /// A run failed; no partial numbers are reported.
    Failed(SortError),
}

/// Reduction over the per-run statistics. Memory is the worst observed
/// high-water mark rather than an average.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkAggregate {
    pub mean_comparisons: f64,
    pub mean_swaps: f64,
    pub mean_time: Duration,
    pub median_time: Duration,
    pub peak_memory_bytes: usize,
}

/// Runs `algorithm` silently `runs` times (at least once) over fresh copies
/// of `data` and reduces the per-run statistics.
pub fn run_benchmark(
    algorithm: SortingAlgorithm,
    data: &[i64],
    runs: usize,
    config: EngineConfig,
) -> BenchmarkReport {
    let runs = runs.max(1);
    let mut collected = Vec::with_capacity(runs);

    for _ in 0..runs {
        let mut engine = SortEngine::with_config(algorithm, data, config);
        if let Err(err) = engine.run(false) {
            return BenchmarkReport {
                algorithm,
                runs,
                outcome: BenchmarkOutcome::Skipped(SkipReason::Failed(err)),
            };
        }
        collected.push(engine.stats());
    }

    let mut times: Vec<Duration> = collected.iter().map(|s| s.execution_time).collect();
    times.sort_unstable();

    let aggregate = BenchmarkAggregate {
        mean_comparisons: mean(collected.iter().map(|s| s.comparisons as f64)),
        mean_swaps: mean(collected.iter().map(|s| s.swaps as f64)),
        mean_time: times.iter().sum::<Duration>() / times.len() as u32,
        median_time: median_time(&times),
        peak_memory_bytes: collected.iter().map(|s| s.memory_bytes).max().unwrap_or(0),
    };

    BenchmarkReport {
        algorithm,
        runs,
        outcome: BenchmarkOutcome::Completed(aggregate),
    }
}

/// Benchmarks each algorithm in turn, consulting the threshold guard first.
/// Over-threshold entries are marked skipped without constructing an engine;
/// one algorithm's failure never blocks its siblings.
pub fn run_sweep(
    algorithms: &[SortingAlgorithm],
    data: &[i64],
    runs: usize,
    config: EngineConfig,
) -> Vec<BenchmarkReport> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let limit = size_threshold(algorithm, &config);
            if data.len() > limit {
                BenchmarkReport {
                    algorithm,
                    runs: 0,
                    outcome: BenchmarkOutcome::Skipped(SkipReason::OverThreshold {
                        size: data.len(),
                        limit,
                    }),
                }
            } else {
                run_benchmark(algorithm, data, runs, config)
            }
        })
        .collect()
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

// `sorted` is non-empty and ascending.
fn median_time(sorted: &[Duration]) -> Duration {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    }
}
