use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    let n = engine.len();
    if n < 2 {
        return Ok(());
    }

    // Bottom-up max-heap build.
    for root in (0..n / 2).rev() {
        sift_down(engine, n, root, record)?;
    }

    for end in (1..n).rev() {
        engine.swap(0, end, record)?;
        sift_down(engine, end, 0, record)?;
    }

    Ok(())
}

fn sift_down(
    engine: &mut SortEngine,
    size: usize,
    root: usize,
    record: bool,
) -> Result<(), SortError> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < size && engine.compare(left, largest, record)? == Ordering::Greater {
        largest = left;
    }
    if right < size && engine.compare(right, largest, record)? == Ordering::Greater {
        largest = right;
    }

    if largest != root {
        engine.swap(root, largest, record)?;
        sift_down(engine, size, largest, record)?;
    }

    Ok(())
}
