mod algorithms;
mod benchmark;
mod engine;
mod error;
mod stats;
mod step;
mod threshold;

pub use benchmark::{
    BenchmarkAggregate, BenchmarkOutcome, BenchmarkReport, SkipReason, run_benchmark, run_sweep,
};
pub use engine::SortEngine;
pub use error::SortError;
pub use stats::SortingStats;
pub use step::Step;
pub use threshold::{exceeds_threshold, exceeds_threshold_with, size_threshold};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortingAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    ExternalMerge,
}

pub const ALL_ALGORITHMS: [SortingAlgorithm; 7] = [
    SortingAlgorithm::Bubble,
    SortingAlgorithm::Selection,
    SortingAlgorithm::Insertion,
    SortingAlgorithm::Quick,
    SortingAlgorithm::Merge,
    SortingAlgorithm::Heap,
    SortingAlgorithm::ExternalMerge,
];

pub fn all_algorithms() -> &'static [SortingAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortingAlgorithm) -> &'static str {
    match algo {
        SortingAlgorithm::Bubble => "bubble_sort",
        SortingAlgorithm::Selection => "selection_sort",
        SortingAlgorithm::Insertion => "insertion_sort",
        SortingAlgorithm::Quick => "quick_sort",
        SortingAlgorithm::Merge => "merge_sort",
        SortingAlgorithm::Heap => "heap_sort",
        SortingAlgorithm::ExternalMerge => "external_merge_sort",
    }
}

/// Immutable per-run configuration. Tests substitute alternate limits by
/// value; nothing in the crate reads ambient globals.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Hard ceiling on recorded steps per run.
    pub max_steps: usize,
    /// Elements the external sort's simulated memory buffer may hold.
    pub memory_capacity: usize,
    /// Largest safe input for the quadratic-class algorithms.
    pub quadratic_threshold: usize,
    /// Largest safe input for the log-linear-class algorithms.
    pub n_log_n_threshold: usize,
}

pub const DEFAULT_CONFIG: EngineConfig = EngineConfig {
    max_steps: 200_000,
    memory_capacity: 10,
    quadratic_threshold: 2_000,
    n_log_n_threshold: 50_000,
};

impl Default for EngineConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn sorted_copy(data: &[i64]) -> Vec<i64> {
        let mut expected = data.to_vec();
        expected.sort_unstable();
        expected
    }

    fn assert_sorts_like_std(data: &[i64]) {
        for &algo in all_algorithms() {
            for record in [false, true] {
                let mut engine = SortEngine::new(algo, data);
                engine.run(record).unwrap();
                assert_eq!(
                    engine.snapshot(),
                    sorted_copy(data),
                    "algorithm={} record={record} input_len={}",
                    algorithm_name(algo),
                    data.len(),
                );
            }
        }
    }

    fn replay(input: &[i64], steps: &[Step]) -> Vec<i64> {
        let mut state = input.to_vec();
        for step in steps {
            match *step {
                Step::Swap { i, j } => state.swap(i, j),
                Step::Overwrite { index, value } => state[index] = value,
                Step::Compare { .. }
                | Step::SplitToChunks { .. }
                | Step::LoadChunkToMemory { .. }
                | Step::WriteToDisk { .. }
                | Step::ComparisonDetails { .. } => {}
            }
        }
        state
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases: [Vec<i64>; 7] = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 32],
            vec![-5, 3, -5, 0, 12, -40, 12],
            vec![i64::MIN, 1, i64::MAX, 0, -1],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_50FF);
        for &size in &[2_usize, 3, 8, 31, 64, 127, 256] {
            let data: Vec<i64> = (0..size).map(|_| rng.random_range(-1_000..=1_000)).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sample_scenario_all_algorithms() {
        let data = [5, 0, 9, -3, 8, 4, 7];
        let expected = vec![-3, 0, 4, 5, 7, 8, 9];

        for &algo in all_algorithms() {
            for record in [false, true] {
                let mut engine = SortEngine::new(algo, &data);
                engine.run(record).unwrap();
                assert_eq!(engine.snapshot(), expected, "{}", algorithm_name(algo));
            }
        }
    }

    #[test]
    fn caller_input_is_never_mutated() {
        let data = vec![9, -1, 4, 4, 0];
        let mut engine = SortEngine::new(SortingAlgorithm::Quick, &data);
        engine.run(true).unwrap();
        assert_eq!(data, vec![9, -1, 4, 4, 0]);
    }

    #[test]
    fn replaying_steps_reconstructs_the_sorted_array() {
        let data = vec![12, -7, 3, 3, 25, 0, -7, 8, 1, 16, -2];
        for &algo in all_algorithms() {
            let mut engine = SortEngine::new(algo, &data);
            let steps = engine.run(true).unwrap();
            assert_eq!(
                replay(&data, &steps),
                sorted_copy(&data),
                "{}",
                algorithm_name(algo)
            );
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(0xD0_2026);
        let data: Vec<i64> = (0..96).map(|_| rng.random_range(-50..=50)).collect();

        for &algo in all_algorithms() {
            let mut first = SortEngine::new(algo, &data);
            let first_steps = first.run(true).unwrap();

            let mut second = SortEngine::new(algo, &data);
            let second_steps = second.run(true).unwrap();

            assert_eq!(first_steps, second_steps, "{}", algorithm_name(algo));

            let mut silent = SortEngine::new(algo, &data);
            silent.run(false).unwrap();
            // Recording must not change what the algorithm does.
            assert_eq!(
                (first.stats().comparisons, first.stats().swaps),
                (silent.stats().comparisons, silent.stats().swaps),
                "{}",
                algorithm_name(algo)
            );
        }
    }

    #[test]
    fn silent_runs_return_no_steps() {
        let mut engine = SortEngine::new(SortingAlgorithm::Merge, &[3, 1, 2]);
        assert!(engine.run(false).unwrap().is_empty());
    }

    #[test]
    fn bubble_sort_trips_the_step_limit_only_when_recording() {
        // 650 strictly descending elements: ~211k comparisons, past the
        // 200k ceiling.
        let data: Vec<i64> = (1..=650).rev().collect();

        let mut recording = SortEngine::new(SortingAlgorithm::Bubble, &data);
        assert_eq!(
            recording.run(true),
            Err(SortError::StepLimitExceeded { limit: 200_000 })
        );

        let mut silent = SortEngine::new(SortingAlgorithm::Bubble, &data);
        silent.run(false).unwrap();
        assert_eq!(silent.snapshot(), sorted_copy(&data));
    }

    #[test]
    fn external_sort_chunking_matches_capacity() {
        // 23 elements at capacity 10: exactly ceil(23 / 10) = 3 chunks.
        let data: Vec<i64> = (0..23).map(|i| (i % 5) - 2).collect();
        let mut engine = SortEngine::new(SortingAlgorithm::ExternalMerge, &data);
        let steps = engine.run(true).unwrap();

        let split: Vec<&Step> = steps
            .iter()
            .filter(|s| matches!(s, Step::SplitToChunks { .. }))
            .collect();
        assert_eq!(split.len(), 1);
        let Step::SplitToChunks { chunks } = split[0] else {
            unreachable!();
        };
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| chunk.len() <= 10));
        let flattened: Vec<i64> = chunks.iter().flatten().copied().collect();
        assert_eq!(flattened, data);

        // Every element lands in the virtual output chunk exactly once.
        let output_writes = steps
            .iter()
            .filter(|s| matches!(s, Step::WriteToDisk { chunk_id: 3, .. }))
            .count();
        assert_eq!(output_writes, 23);

        assert_eq!(engine.snapshot(), sorted_copy(&data));
    }

    #[test]
    fn external_sort_capacity_is_tunable() {
        let config = EngineConfig {
            memory_capacity: 4,
            ..DEFAULT_CONFIG
        };
        let data: Vec<i64> = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 0];
        let mut engine = SortEngine::with_config(SortingAlgorithm::ExternalMerge, &data, config);
        let steps = engine.run(true).unwrap();

        let Some(Step::SplitToChunks { chunks }) = steps.first() else {
            panic!("first step must materialize the partitions");
        };
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| chunk.len() <= 4));
        assert_eq!(engine.snapshot(), sorted_copy(&data));
    }

    #[test]
    fn external_merge_lowest_chunk_wins_ties() {
        let config = EngineConfig {
            memory_capacity: 2,
            ..DEFAULT_CONFIG
        };
        // Chunks sort to [1, 3] and [2, 3]; the third round ties on 3.
        let data = vec![3, 1, 3, 2];
        let mut engine = SortEngine::with_config(SortingAlgorithm::ExternalMerge, &data, config);
        let steps = engine.run(true).unwrap();

        let winners: Vec<usize> = steps
            .iter()
            .filter_map(|s| match s {
                Step::ComparisonDetails { winner, .. } => Some(*winner),
                _ => None,
            })
            .collect();
        assert_eq!(winners, vec![0, 1, 0, 1]);
        assert_eq!(engine.snapshot(), vec![1, 2, 3, 3]);
    }

    #[test]
    fn external_sort_empty_input_emits_nothing() {
        let mut engine = SortEngine::new(SortingAlgorithm::ExternalMerge, &[]);
        assert!(engine.run(true).unwrap().is_empty());
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn external_sort_zero_capacity_fails_fast() {
        let config = EngineConfig {
            memory_capacity: 0,
            ..DEFAULT_CONFIG
        };
        for record in [false, true] {
            let mut engine =
                SortEngine::with_config(SortingAlgorithm::ExternalMerge, &[1, 2], config);
            assert_eq!(
                engine.run(record),
                Err(SortError::CapacityExceeded {
                    size: 1,
                    capacity: 0
                })
            );
        }
    }

    #[test]
    fn memory_estimate_tracks_auxiliary_high_water() {
        let data: Vec<i64> = (0..16).rev().collect();
        let base = data.len() * size_of::<i64>();

        let mut bubble = SortEngine::new(SortingAlgorithm::Bubble, &data);
        bubble.run(false).unwrap();
        assert_eq!(bubble.stats().memory_bytes, base);

        // The final top-level merge buffers the whole array.
        let mut merge = SortEngine::new(SortingAlgorithm::Merge, &data);
        merge.run(false).unwrap();
        assert_eq!(merge.stats().memory_bytes, base * 2);

        let mut external = SortEngine::new(SortingAlgorithm::ExternalMerge, &data);
        external.run(false).unwrap();
        assert_eq!(
            external.stats().memory_bytes,
            base + DEFAULT_CONFIG.memory_capacity * size_of::<i64>()
        );
    }

    #[test]
    fn recorded_compare_steps_match_comparison_counter() {
        let data = vec![4, -2, 7, 0, 4, -9, 3, 1];
        for algo in [
            SortingAlgorithm::Bubble,
            SortingAlgorithm::Selection,
            SortingAlgorithm::Insertion,
            SortingAlgorithm::Quick,
            SortingAlgorithm::Merge,
            SortingAlgorithm::Heap,
        ] {
            let mut engine = SortEngine::new(algo, &data);
            let steps = engine.run(true).unwrap();
            let compares = steps
                .iter()
                .filter(|s| matches!(s, Step::Compare { .. }))
                .count() as u64;
            assert_eq!(
                engine.stats().comparisons,
                compares,
                "{}",
                algorithm_name(algo)
            );
        }
    }
}
