use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    let n = engine.len();
    if n < 2 {
        return Ok(());
    }

    for pass in 0..n - 1 {
        // Everything past n - pass is already in place.
        for j in 0..n - 1 - pass {
            if engine.compare(j, j + 1, record)? == Ordering::Greater {
                engine.swap(j, j + 1, record)?;
            }
        }
    }

    Ok(())
}
