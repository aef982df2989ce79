use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::error::SortError;
use crate::stats::SortingStats;
use crate::step::Step;
use crate::{EngineConfig, SortingAlgorithm, algorithms};

/// Owns one working copy of the input and every counter a run accumulates.
/// Concrete algorithms mutate the array only through [`SortEngine::compare`],
/// [`SortEngine::swap`] and [`SortEngine::overwrite`], so every observable
/// mutation is uniformly counted and, when recording, uniformly steppable.
pub struct SortEngine {
    algorithm: SortingAlgorithm,
    array: Vec<i64>,
    steps: Vec<Step>,
    comparisons: u64,
    swaps: u64,
    duration: Duration,
    auxiliary_space: usize,
    config: EngineConfig,
}

impl SortEngine {
    pub fn new(algorithm: SortingAlgorithm, input: &[i64]) -> Self {
        Self::with_config(algorithm, input, EngineConfig::default())
    }

    pub fn with_config(algorithm: SortingAlgorithm, input: &[i64], config: EngineConfig) -> Self {
        Self {
            algorithm,
            array: input.to_vec(),
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
            duration: Duration::ZERO,
            auxiliary_space: 0,
            config,
        }
    }

    /// Runs the configured algorithm to completion. On success the owned
    /// array is sorted ascending regardless of `record`; the returned trace
    /// is empty for silent runs.
    pub fn run(&mut self, record: bool) -> Result<Vec<Step>, SortError> {
        self.steps.clear();
        self.comparisons = 0;
        self.swaps = 0;
        self.auxiliary_space = 0;

        let start = Instant::now();
        let outcome = self.dispatch(record);
        self.duration = start.elapsed();
        outcome?;

        if record {
            Ok(std::mem::take(&mut self.steps))
        } else {
            Ok(Vec::new())
        }
    }

    fn dispatch(&mut self, record: bool) -> Result<(), SortError> {
        match self.algorithm {
            SortingAlgorithm::Bubble => algorithms::bubble::sort(self, record),
            SortingAlgorithm::Selection => algorithms::selection::sort(self, record),
            SortingAlgorithm::Insertion => algorithms::insertion::sort(self, record),
            SortingAlgorithm::Quick => algorithms::quick::sort(self, record),
            SortingAlgorithm::Merge => algorithms::merge::sort(self, record),
            SortingAlgorithm::Heap => algorithms::heap::sort(self, record),
            SortingAlgorithm::ExternalMerge => algorithms::external::sort(self, record),
        }
    }

    /// Meaningful once `run` has completed.
    pub fn stats(&self) -> SortingStats {
        SortingStats {
            algorithm: self.algorithm,
            comparisons: self.comparisons,
            swaps: self.swaps,
            execution_time: self.duration,
            memory_bytes: self.array.len() * size_of::<i64>() + self.auxiliary_space,
        }
    }

    pub fn algorithm(&self) -> SortingAlgorithm {
        self.algorithm
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn values(&self) -> &[i64] {
        &self.array
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.array.clone()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    // Only recording mode can trip the ceiling; silent runs are unbounded.
    fn ensure_step_capacity(&self, record: bool) -> Result<(), SortError> {
        if record && self.steps.len() >= self.config.max_steps {
            return Err(SortError::StepLimitExceeded {
                limit: self.config.max_steps,
            });
        }
        Ok(())
    }

    pub(crate) fn push_step(&mut self, step: Step, record: bool) -> Result<(), SortError> {
        if record {
            self.ensure_step_capacity(true)?;
            self.steps.push(step);
        }
        Ok(())
    }

    /// Counts and (when recording) traces one comparison. Callers branch on
    /// the returned ordering only; ties carry no stability guarantee.
    pub(crate) fn compare(
        &mut self,
        i: usize,
        j: usize,
        record: bool,
    ) -> Result<Ordering, SortError> {
        self.comparisons += 1;
        self.push_step(Step::Compare { i, j }, record)?;
        Ok(self.array[i].cmp(&self.array[j]))
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize, record: bool) -> Result<(), SortError> {
        self.swaps += 1;
        self.push_step(Step::Swap { i, j }, record)?;
        self.array.swap(i, j);
        Ok(())
    }

    pub(crate) fn overwrite(
        &mut self,
        index: usize,
        value: i64,
        record: bool,
    ) -> Result<(), SortError> {
        self.swaps += 1;
        self.push_step(Step::Overwrite { index, value }, record)?;
        self.array[index] = value;
        Ok(())
    }

    /// A comparison that happens outside the primary array, e.g. inside the
    /// external sort's chunk buffer or its merge tournament.
    pub(crate) fn note_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub(crate) fn raise_auxiliary(&mut self, bytes: usize) {
        self.auxiliary_space = self.auxiliary_space.max(bytes);
    }
}
