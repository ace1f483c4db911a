//! Configuration for ranking operations.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordMatchError};
use crate::rank::DEFAULT_LIMIT;

/// Configuration for a [`Ranker`](crate::rank::Ranker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Number of results returned when no explicit limit is given.
    pub default_limit: usize,

    /// Longest query or candidate, in characters, the ranker will score.
    /// If None, inputs are unbounded.
    pub max_input_chars: Option<usize>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_input_chars: None,
        }
    }
}

impl RankerConfig {
    /// Check the configuration for values no ranking can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == Some(0) {
            return Err(WordMatchError::config(
                "max_input_chars must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Options for a ranking call that uses the configured default limit.
    pub fn default_options(&self) -> RankOptions {
        RankOptions::new(self.default_limit)
    }
}

/// Options for a specific ranking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    /// Maximum number of results to return.
    pub limit: usize,

    /// Time budget for the whole ranking call.
    pub timeout: Option<Duration>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }
}

impl RankOptions {
    /// Create new options with the specified limit.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Set the time budget for this ranking call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute deadline for a call starting now.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.timeout.map(|timeout| Instant::now() + timeout)
    }
}
