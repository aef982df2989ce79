use crate::engine::SortEngine;
use crate::error::SortError;
use crate::step::Step;

/// External merge sort against a simulated memory buffer of
/// `config.memory_capacity` elements: partition into capacity-bounded
/// chunks, sort each chunk inside the buffer, then k-way merge the sorted
/// chunks into a virtual output chunk while committing every winner to the
/// primary array.
pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    if engine.is_empty() {
        return Ok(());
    }

    let capacity = engine.config().memory_capacity;
    let chunks = split_into_chunks(engine, capacity)?;

    engine.raise_auxiliary(capacity * size_of::<i64>());
    engine.push_step(
        Step::SplitToChunks {
            chunks: chunks.clone(),
        },
        record,
    )?;

    let mut sorted_chunks = Vec::with_capacity(chunks.len());
    for (chunk_id, chunk) in chunks.into_iter().enumerate() {
        engine.push_step(
            Step::LoadChunkToMemory {
                chunk_id,
                data: chunk.clone(),
            },
            record,
        )?;

        let mut sorted = chunk;
        sort_chunk(engine, &mut sorted);

        for (index, &value) in sorted.iter().enumerate() {
            engine.push_step(
                Step::WriteToDisk {
                    chunk_id,
                    index,
                    value,
                },
                record,
            )?;
        }
        sorted_chunks.push(sorted);
    }

    merge_chunks(engine, &sorted_chunks, record)
}

fn split_into_chunks(engine: &SortEngine, capacity: usize) -> Result<Vec<Vec<i64>>, SortError> {
    let stride = capacity.max(1);
    let mut chunks = Vec::with_capacity(engine.len().div_ceil(stride));

    for chunk in engine.values().chunks(stride) {
        if chunk.len() > capacity {
            return Err(SortError::CapacityExceeded {
                size: chunk.len(),
                capacity,
            });
        }
        chunks.push(chunk.to_vec());
    }

    Ok(chunks)
}

// Chunk-local sort inside the simulated buffer. Comparisons count toward the
// run total but emit no steps; the per-element writes are traced by the
// caller as disk writes.
fn sort_chunk(engine: &mut SortEngine, chunk: &mut [i64]) {
    for i in 1..chunk.len() {
        let mut j = i;
        while j > 0 {
            engine.note_comparison();
            if chunk[j - 1] <= chunk[j] {
                break;
            }
            chunk.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn merge_chunks(
    engine: &mut SortEngine,
    chunks: &[Vec<i64>],
    record: bool,
) -> Result<(), SortError> {
    let output_chunk = chunks.len();
    let total: usize = chunks.iter().map(Vec::len).sum();
    let mut cursors = vec![0usize; chunks.len()];

    for write_index in 0..total {
        let mut winner: Option<(usize, i64)> = None;
        let mut candidates = Vec::new();

        for (chunk_id, chunk) in chunks.iter().enumerate() {
            let cursor = cursors[chunk_id];
            if cursor >= chunk.len() {
                continue;
            }
            let value = chunk[cursor];
            candidates.push(chunk_id);
            engine.note_comparison();
            // Strict `<`: the incumbent keeps its slot on equal values, so
            // the lowest chunk id wins ties.
            match winner {
                Some((_, best)) if value >= best => {}
                _ => winner = Some((chunk_id, value)),
            }
        }

        let Some((winner_chunk, winner_value)) = winner else {
            break;
        };

        engine.push_step(
            Step::LoadChunkToMemory {
                chunk_id: winner_chunk,
                data: vec![winner_value],
            },
            record,
        )?;
        engine.push_step(
            Step::ComparisonDetails {
                candidates,
                winner: winner_chunk,
            },
            record,
        )?;
        engine.push_step(
            Step::WriteToDisk {
                chunk_id: output_chunk,
                index: write_index,
                value: winner_value,
            },
            record,
        )?;
        engine.overwrite(write_index, winner_value, record)?;

        cursors[winner_chunk] += 1;
    }

    Ok(())
}
