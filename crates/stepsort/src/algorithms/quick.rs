use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    let n = engine.len();
    if n < 2 {
        return Ok(());
    }
    sort_range(engine, 0, n - 1, record)
}

// Inclusive bounds.
fn sort_range(
    engine: &mut SortEngine,
    low: usize,
    high: usize,
    record: bool,
) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }

    let pivot = partition(engine, low, high, record)?;
    if pivot > low {
        sort_range(engine, low, pivot - 1, record)?;
    }
    sort_range(engine, pivot + 1, high, record)
}

// Lomuto partition around the last element. Swaps are unconditional, so
// no-op exchanges still count and still appear in the trace.
fn partition(
    engine: &mut SortEngine,
    low: usize,
    high: usize,
    record: bool,
) -> Result<usize, SortError> {
    let mut slot = low;
    for probe in low..high {
        if engine.compare(probe, high, record)? != Ordering::Greater {
            engine.swap(slot, probe, record)?;
            slot += 1;
        }
    }
    engine.swap(slot, high, record)?;
    Ok(slot)
}
