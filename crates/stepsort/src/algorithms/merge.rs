use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    let n = engine.len();
    if n < 2 {
        return Ok(());
    }
    sort_range(engine, 0, n, record)
}

fn sort_range(
    engine: &mut SortEngine,
    left: usize,
    right: usize,
    record: bool,
) -> Result<(), SortError> {
    if right - left < 2 {
        return Ok(());
    }

    // The left run takes the longer half on odd lengths.
    let mid = left + (right - left + 1) / 2;
    sort_range(engine, left, mid, record)?;
    sort_range(engine, mid, right, record)?;
    merge_runs(engine, left, mid, right, record)
}

// Stable: the left run wins ties, so equal values keep their relative order
// in the overwrite sequence.
fn merge_runs(
    engine: &mut SortEngine,
    left: usize,
    mid: usize,
    right: usize,
    record: bool,
) -> Result<(), SortError> {
    let mut merged = Vec::with_capacity(right - left);
    let mut i = left;
    let mut j = mid;

    while i < mid && j < right {
        if engine.compare(i, j, record)? != Ordering::Greater {
            merged.push(engine.values()[i]);
            i += 1;
        } else {
            merged.push(engine.values()[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&engine.values()[i..mid]);
    merged.extend_from_slice(&engine.values()[j..right]);

    engine.raise_auxiliary(merged.len() * size_of::<i64>());

    for (offset, &value) in merged.iter().enumerate() {
        engine.overwrite(left + offset, value, record)?;
    }

    Ok(())
}
