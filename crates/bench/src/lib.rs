use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x51E9_2026;

/// How much wall clock a benchmark group may spend per function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeTier {
    Quick,
    Standard,
    Extended,
}

pub fn tier_for_input(size: usize) -> RuntimeTier {
    if size <= 1_024 {
        RuntimeTier::Quick
    } else if size <= 16_384 {
        RuntimeTier::Standard
    } else {
        RuntimeTier::Extended
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: RuntimeTier) {
    let (samples, warm_up_ms, measure_ms) = match tier {
        RuntimeTier::Quick => (20, 100, 250),
        RuntimeTier::Standard => (15, 400, 800),
        RuntimeTier::Extended => (10, 800, 1_500),
    };
    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
