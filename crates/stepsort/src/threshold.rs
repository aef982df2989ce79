use crate::{DEFAULT_CONFIG, EngineConfig, SortingAlgorithm};

/// Largest input considered safe for an algorithm, per complexity class.
pub fn size_threshold(algorithm: SortingAlgorithm, config: &EngineConfig) -> usize {
    match algorithm {
        SortingAlgorithm::Bubble | SortingAlgorithm::Selection | SortingAlgorithm::Insertion => {
            config.quadratic_threshold
        }
        SortingAlgorithm::Quick
        | SortingAlgorithm::Merge
        | SortingAlgorithm::Heap
        | SortingAlgorithm::ExternalMerge => config.n_log_n_threshold,
    }
}

pub fn exceeds_threshold(algorithm: SortingAlgorithm, size: usize) -> bool {
    exceeds_threshold_with(algorithm, size, &DEFAULT_CONFIG)
}

pub fn exceeds_threshold_with(
    algorithm: SortingAlgorithm,
    size: usize,
    config: &EngineConfig,
) -> bool {
    size > size_threshold(algorithm, config)
}
