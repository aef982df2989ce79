mod sanitize;

pub use sanitize::{ParsedInput, parse_input, sanitize_input};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const MIN_VALUE: i64 = 5;
pub const MAX_VALUE: i64 = 100;
pub const DEFAULT_DATASET_SIZE: usize = 30;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    RandomUniform,
    NearlySorted,
    Reverse,
    DuplicateHeavy,
    Outlier,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted,
    Distribution::Reverse,
    Distribution::DuplicateHeavy,
    Distribution::Outlier,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted => "nearly_sorted",
            Self::Reverse => "reverse",
            Self::DuplicateHeavy => "duplicate_heavy",
            Self::Outlier => "outlier",
        }
    }
}

pub fn generate(dist: Distribution, size: usize, seed: u64) -> Vec<i64> {
    generate_in(dist, size, seed, MIN_VALUE, MAX_VALUE)
}

pub fn generate_in(dist: Distribution, size: usize, seed: u64, min: i64, max: i64) -> Vec<i64> {
    debug_assert!(min <= max);
    let mut rng = StdRng::seed_from_u64(seed);
    match dist {
        Distribution::RandomUniform => random_uniform(&mut rng, size, min, max),
        Distribution::NearlySorted => nearly_sorted(&mut rng, size, min, max),
        Distribution::Reverse => reverse_ramp(size, min, max),
        Distribution::DuplicateHeavy => duplicate_heavy(&mut rng, size, min, max),
        Distribution::Outlier => outlier(&mut rng, size, min, max),
    }
}

fn random_uniform(rng: &mut StdRng, size: usize, min: i64, max: i64) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(min..=max)).collect()
}

// Ascending ramp with roughly 5% of the pairs disturbed.
fn nearly_sorted(rng: &mut StdRng, size: usize, min: i64, max: i64) -> Vec<i64> {
    let step = ramp_step(size, min, max);
    let mut data: Vec<i64> = (0..size).map(|i| (min + i as i64 * step).min(max)).collect();
    if size < 2 {
        return data;
    }

    let swaps = (size / 20).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

fn reverse_ramp(size: usize, min: i64, max: i64) -> Vec<i64> {
    let step = ramp_step(size, min, max);
    (0..size).map(|i| (max - i as i64 * step).max(min)).collect()
}

// Values drawn from a pool of roughly 20% unique entries.
fn duplicate_heavy(rng: &mut StdRng, size: usize, min: i64, max: i64) -> Vec<i64> {
    let unique = (size / 5).max(2);
    let pool: Vec<i64> = (0..unique).map(|_| rng.random_range(min..=max)).collect();
    (0..size).map(|_| pool[rng.random_range(0..pool.len())]).collect()
}

// Uniform base with roughly 5% of the entries pinned to an extreme.
fn outlier(rng: &mut StdRng, size: usize, min: i64, max: i64) -> Vec<i64> {
    let mut data = random_uniform(rng, size, min, max);
    if data.is_empty() {
        return data;
    }

    let outliers = (size / 20).max(1);
    for _ in 0..outliers {
        let target = rng.random_range(0..size);
        data[target] = if rng.random_bool(0.5) { max } else { min };
    }
    data
}

#[inline]
fn ramp_step(size: usize, min: i64, max: i64) -> i64 {
    ((max - min) / size.max(1) as i64).max(1)
}
