use std::cmp::Ordering;

use crate::engine::SortEngine;
use crate::error::SortError;

pub(crate) fn sort(engine: &mut SortEngine, record: bool) -> Result<(), SortError> {
    for i in 1..engine.len() {
        let mut j = i;
        while j > 0 && engine.compare(j - 1, j, record)? == Ordering::Greater {
            engine.swap(j - 1, j, record)?;
            j -= 1;
        }
    }

    Ok(())
}
