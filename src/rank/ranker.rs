//! Sequential ranker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::debug;

use crate::distance::LevenshteinMatcher;
use crate::error::{Result, WordMatchError};
use crate::rank::collector::TopKCollector;
use crate::rank::config::{RankOptions, RankerConfig};
use crate::rank::{RankEngine, ScoredWord, materialize};

/// Scores every dictionary word on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Create a new ranker.
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Get the ranker configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank with the configured default limit.
    pub fn rank_default<S>(&self, query: &str, dictionary: &[S]) -> Result<Vec<ScoredWord>>
    where
        S: AsRef<str> + Sync,
    {
        self.rank_with_options(query, dictionary, &self.config.default_options())
    }
}

impl RankEngine for Ranker {
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

        let limits = ScoringLimits {
            max_input_chars: self.config.max_input_chars,
            deadline: options.deadline(),
            cancelled: None,
        };
        let matcher = LevenshteinMatcher::new(query);
        limits.check_query(&matcher)?;

        let mut collector = TopKCollector::new(options.limit);
        let skipped = score_words(&matcher, dictionary, 0, &mut collector, &limits)?;
        debug!(
            "ranked {:?}: scored {} words, skipped {} blank entries, kept {}",
            query,
            collector.total_collected(),
            skipped,
            collector.len()
        );

        Ok(materialize(dictionary, collector.into_sorted_vec()))
    }
}

/// Limits checked while scoring.
#[derive(Debug, Default)]
pub(crate) struct ScoringLimits<'a> {
    pub max_input_chars: Option<usize>,
    pub deadline: Option<Instant>,
    pub cancelled: Option<&'a AtomicBool>,
}

impl ScoringLimits<'_> {
    pub fn check_query(&self, matcher: &LevenshteinMatcher) -> Result<()> {
        if let Some(max) = self.max_input_chars
            && matcher.query_len() > max
        {
            return Err(WordMatchError::resource_exhausted(format!(
                "query has {} characters, limit is {max}",
                matcher.query_len()
            )));
        }
        Ok(())
    }

    fn check_candidate(&self, index: usize, len: usize) -> Result<()> {
        if let Some(max) = self.max_input_chars
            && len > max
        {
            return Err(WordMatchError::resource_exhausted(format!(
                "dictionary entry {index} has {len} characters, limit is {max}"
            )));
        }
        Ok(())
    }

    fn check_interrupted(&self) -> Result<()> {
        if let Some(cancelled) = self.cancelled
            && cancelled.load(Ordering::Relaxed)
        {
            return Err(WordMatchError::cancelled("ranking was cancelled"));
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(WordMatchError::cancelled("ranking deadline exceeded"));
        }
        Ok(())
    }
}

/// Score `words` into `collector`. `base_index` is the dictionary position
/// of `words[0]`. Blank entries are skipped; returns how many were.
pub(crate) fn score_words<S: AsRef<str>>(
    matcher: &LevenshteinMatcher,
    words: &[S],
    base_index: usize,
    collector: &mut TopKCollector,
    limits: &ScoringLimits<'_>,
) -> Result<usize> {
    let mut skipped = 0;

    for (offset, word) in words.iter().enumerate() {
        limits.check_interrupted()?;

        let word = word.as_ref();
        if word.is_empty() {
            skipped += 1;
            continue;
        }

        let index = base_index + offset;
        let len = word.chars().count();
        limits.check_candidate(index, len)?;
        collector.collect(index, matcher.distance_with_len(word, len));
    }

    Ok(skipped)
}
