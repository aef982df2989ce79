/// One observable engine action. Replaying `Swap` and `Overwrite` steps in
/// order over a copy of the original input reconstructs the final array; the
/// remaining variants carry bookkeeping for consumers that animate data
/// movement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    Compare {
        i: usize,
        j: usize,
    },
    Swap {
        i: usize,
        j: usize,
    },
    Overwrite {
        index: usize,
        value: i64,
    },
    /// The external sort materialized its bounded partitions.
    SplitToChunks {
        chunks: Vec<Vec<i64>>,
    },
    /// Chunk data occupies the simulated memory buffer. During the merge
    /// phase `data` holds just the winning element.
    LoadChunkToMemory {
        chunk_id: usize,
        data: Vec<i64>,
    },
    /// A value committed to a chunk slot. `chunk_id` one past the last input
    /// chunk addresses the virtual output chunk.
    WriteToDisk {
        chunk_id: usize,
        index: usize,
        value: i64,
    },
    /// One round of the merge tournament: every chunk id examined and the
    /// one that supplied the minimum.
    ComparisonDetails {
        candidates: Vec<usize>,
        winner: usize,
    },
}
