//! Main parallel ranking engine implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::distance::LevenshteinMatcher;
use crate::error::{Result, WordMatchError};
use crate::parallel::config::ParallelRankConfig;
use crate::parallel::task::{ScoringTask, TaskResult};
use crate::rank::ranker::ScoringLimits;
use crate::rank::{RankEngine, RankOptions, ScoredWord, materialize};

/// Ranks a dictionary by scoring chunks of it on a worker pool.
pub struct ParallelRanker {
    /// Configuration for the engine.
    config: ParallelRankConfig,

    /// Thread pool for parallel execution.
    thread_pool: Arc<ThreadPool>,
}

impl ParallelRanker {
    /// Create a new parallel ranker.
    pub fn new(config: ParallelRankConfig) -> Result<Self> {
        config.validate()?;
        let thread_pool_size = config.effective_threads();

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("wordmatch-rank-{i}"))
            .build()
            .map_err(|e| WordMatchError::internal(format!("Failed to create thread pool: {e}")))?;
        info!("parallel ranker started with {thread_pool_size} worker threads");

        Ok(Self {
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ParallelRankConfig {
        &self.config
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Rank with the configured default limit.
    pub fn rank_default<S>(&self, query: &str, dictionary: &[S]) -> Result<Vec<ScoredWord>>
    where
        S: AsRef<str> + Sync,
    {
        self.rank_with_options(query, dictionary, &self.config.ranker.default_options())
    }

    /// Execute tasks on the pool and gather every result.
    fn execute_tasks<S>(
        &self,
        tasks: Vec<ScoringTask>,
        matcher: &LevenshteinMatcher,
        dictionary: &[S],
        options: &RankOptions,
    ) -> Vec<TaskResult>
    where
        S: AsRef<str> + Sync,
    {
        let num_tasks = tasks.len();
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancelled = AtomicBool::new(false);
        let limits = ScoringLimits {
            max_input_chars: self.config.ranker.max_input_chars,
            deadline: options.deadline(),
            cancelled: Some(&cancelled),
        };

        self.thread_pool.scope(|scope| {
            for task in tasks {
                let tx = tx.clone();
                let limits = &limits;
                let cancelled = &cancelled;

                scope.spawn(move |_| {
                    let result = task.execute(matcher, dictionary, limits);
                    if !result.is_success() {
                        // Siblings stop at their next word.
                        cancelled.store(true, Ordering::Relaxed);
                    }
                    let _ = tx.send(result);
                });
            }
        });

        // Drop the original sender so the receiver ends after the last task.
        drop(tx);

        let results: Vec<TaskResult> = rx.iter().collect();
        debug_assert_eq!(results.len(), num_tasks);
        results
    }
}

impl RankEngine for ParallelRanker {
    fn rank_with_options<S>(
        &self,
        query: &str,
        dictionary: &[S],
        options: &RankOptions,
    ) -> Result<Vec<ScoredWord>>
    where
        S: AsRef<str> + Sync,
    {
        if options.limit == 0 || dictionary.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let matcher = LevenshteinMatcher::new(query);
        ScoringLimits {
            max_input_chars: self.config.ranker.max_input_chars,
            ..Default::default()
        }
        .check_query(&matcher)?;

        let tasks = ScoringTask::partition(
            dictionary.len(),
            self.num_threads(),
            self.config.min_chunk_size,
            options.limit,
        );
        let num_tasks = tasks.len();
        let results = self.execute_tasks(tasks, &matcher, dictionary, options);
        let slowest = slowest_task(&results);

        let mut merged = Vec::new();
        let mut failures = Vec::new();
        let mut scored = 0;
        for result in results {
            let task_id = result.task_id;
            scored += result.scored;
            match result.into_result() {
                Ok(candidates) => merged.extend(candidates),
                Err(error) => failures.push((task_id, error)),
            }
        }

        // Report the root cause: prefer a real failure over the
        // cancellations it triggered in sibling tasks, then the earliest
        // chunk, as a sequential pass would.
        failures.sort_by_key(|(task_id, error)| {
            (matches!(error, WordMatchError::OperationCancelled(_)), *task_id)
        });
        if let Some((task_id, error)) = failures.into_iter().next() {
            warn!("ranking {query:?} failed in task {task_id}: {error}");
            return Err(error);
        }

        // Candidate order is (distance, index); indices are unique, so this
        // reproduces the sequential tie-break exactly.
        merged.sort();
        merged.truncate(options.limit);

        debug!(
            "ranked {:?}: {} tasks, scored {} words, kept {} in {:?} (slowest task {:?})",
            query,
            num_tasks,
            scored,
            merged.len(),
            start.elapsed(),
            slowest
        );

        Ok(materialize(dictionary, merged))
    }
}

/// The task that took longest, as `(task_id, execution_time)`.
fn slowest_task(results: &[TaskResult]) -> Option<(usize, Duration)> {
    results
        .iter()
        .max_by_key(|result| result.execution_time)
        .map(|result| (result.task_id, result.execution_time))
}
