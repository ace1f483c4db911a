//! Scoring task definitions for parallel execution.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::distance::LevenshteinMatcher;
use crate::error::{Result, WordMatchError};
use crate::rank::collector::{Candidate, TopKCollector};
use crate::rank::ranker::{ScoringLimits, score_words};

/// A contiguous slice of the dictionary scored by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTask {
    /// Position of this task in the partition.
    pub task_id: usize,

    /// Dictionary positions covered by this task.
    pub range: Range<usize>,

    /// Maximum number of candidates the task keeps.
    pub limit: usize,
}

impl ScoringTask {
    /// Create a new scoring task.
    pub fn new(task_id: usize, range: Range<usize>, limit: usize) -> Self {
        Self {
            task_id,
            range,
            limit,
        }
    }

    /// Split `len` dictionary entries into tasks of at least `min_chunk_size`
    /// entries, aiming for one task per worker.
    pub fn partition(len: usize, workers: usize, min_chunk_size: usize, limit: usize) -> Vec<Self> {
        if len == 0 {
            return Vec::new();
        }

        let chunk_size = len.div_ceil(workers.max(1)).max(min_chunk_size.max(1));
        (0..len)
            .step_by(chunk_size)
            .enumerate()
            .map(|(task_id, start)| Self::new(task_id, start..(start + chunk_size).min(len), limit))
            .collect()
    }

    /// Score this task's slice of `dictionary`.
    pub(crate) fn execute<S: AsRef<str>>(
        self,
        matcher: &LevenshteinMatcher,
        dictionary: &[S],
        limits: &ScoringLimits<'_>,
    ) -> TaskResult {
        let start = Instant::now();
        let mut collector = TopKCollector::new(self.limit);

        let outcome = score_words(
            matcher,
            &dictionary[self.range.clone()],
            self.range.start,
            &mut collector,
            limits,
        );

        match outcome {
            Ok(_) => {
                let scored = collector.total_collected();
                TaskResult::success(
                    self.task_id,
                    collector.into_sorted_vec(),
                    scored,
                    start.elapsed(),
                )
            }
            Err(error) => TaskResult::failure(self.task_id, error, start.elapsed()),
        }
    }
}

/// Result of executing a scoring task.
#[derive(Debug)]
pub struct TaskResult {
    /// Task ID this result belongs to.
    pub task_id: usize,

    /// Best candidates of the task's slice, best first.
    pub candidates: Vec<Candidate>,

    /// Number of non-blank entries scored.
    pub scored: u64,

    /// Error if the task failed.
    pub error: Option<WordMatchError>,

    /// Execution time for this task.
    pub execution_time: Duration,
}

impl TaskResult {
    /// Create a successful task result.
    pub fn success(
        task_id: usize,
        candidates: Vec<Candidate>,
        scored: u64,
        execution_time: Duration,
    ) -> Self {
        Self {
            task_id,
            candidates,
            scored,
            error: None,
            execution_time,
        }
    }

    /// Create a failed task result.
    pub fn failure(task_id: usize, error: WordMatchError, execution_time: Duration) -> Self {
        Self {
            task_id,
            candidates: Vec::new(),
            scored: 0,
            error: Some(error),
            execution_time,
        }
    }

    /// Check if the task succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Split into the task's candidates or its error.
    pub fn into_result(self) -> Result<Vec<Candidate>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.candidates),
        }
    }
}
