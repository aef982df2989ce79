use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    let n = engine.len();
    if n < 2 {
        return Ok(());
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if engine.compare(j, min_index, record)? == Ordering::Less {
                min_index = j;
            }
        }
        // Skip the no-op swap when the slot already holds the minimum.
        if min_index != i {
            engine.swap(i, min_index, record)?;
        }
    }

    Ok(())
}
