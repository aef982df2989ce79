use std::time::Duration;

use crate::SortingAlgorithm;

/// Snapshot of one finished run. `memory_bytes` is the primary array
/// footprint plus the auxiliary-space high-water mark.
#[derive(Clone, Copy, Debug)]
pub struct SortingStats {
    pub algorithm: SortingAlgorithm,
    pub comparisons: u64,
    pub swaps: u64,
    pub execution_time: Duration,
    pub memory_bytes: usize,
}
