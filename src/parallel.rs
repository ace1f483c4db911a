//! Parallel ranking across a worker pool.
//!
//! The dictionary is split into contiguous chunks, each chunk is scored on
//! its own worker with a bounded top-k collector, and the partial results
//! are merged on `(distance, original_index)`. The merged ranking is
//! identical to [`Ranker`](crate::rank::Ranker) output, including tie order,
//! regardless of worker count or scheduling.

pub mod config;
pub mod engine;
pub mod task;

pub use config::ParallelRankConfig;
pub use engine::ParallelRanker;
pub use task::{ScoringTask, TaskResult};
