use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    /// Recording would grow the trace past the configured ceiling. Rerun
    /// without recording or reduce the input size.
    #[error("step limit of {limit} reached; rerun without recording or reduce the input size")]
    StepLimitExceeded { limit: usize },

    /// A chunk larger than the simulated memory buffer. Unreachable under the
    /// partition math unless the capacity is misconfigured.
    #[error("chunk of {size} elements does not fit the memory buffer of {capacity}")]
    CapacityExceeded { size: usize, capacity: usize },
}
