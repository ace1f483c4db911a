//! Configuration for parallel ranking.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordMatchError};
use crate::rank::RankerConfig;

/// Configuration for [`ParallelRanker`](crate::parallel::ParallelRanker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelRankConfig {
    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Smallest number of dictionary entries handed to a single task.
    pub min_chunk_size: usize,

    /// Limits shared with the sequential ranker.
    pub ranker: RankerConfig,
}

impl Default for ParallelRankConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            min_chunk_size: 4096,
            ranker: RankerConfig::default(),
        }
    }
}

impl ParallelRankConfig {
    /// Set the thread pool size.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Set the minimum chunk size.
    pub fn with_min_chunk_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self
    }

    /// Number of worker threads this configuration asks for.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values no ranking can run with.
    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(WordMatchError::config(
                "thread_pool_size must be greater than zero",
            ));
        }
        if self.min_chunk_size == 0 {
            return Err(WordMatchError::config(
                "min_chunk_size must be greater than zero",
            ));
        }
        self.ranker.validate()
    }
}
