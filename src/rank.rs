//! Top-k ranking of dictionary words by edit distance to a query.
//!
//! Every non-empty dictionary entry is scored against the query with
//! [`levenshtein_distance`](crate::distance::levenshtein_distance). The
//! result holds the `k` closest words in ascending distance order; words
//! at equal distance keep their original dictionary order.

pub mod collector;
pub mod config;
pub mod ranker;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordMatchError};

pub use collector::{Candidate, TopKCollector};
pub use config::{RankOptions, RankerConfig};
pub use ranker::Ranker;

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// A dictionary word together with its distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The dictionary entry.
    pub word: String,

    /// Edit distance between the query and `word`.
    pub distance: usize,

    /// Position of `word` in the dictionary it was ranked from.
    pub index: usize,
}

impl ScoredWord {
    /// View this result as a `(word, distance)` pair.
    pub fn as_pair(&self) -> (&str, usize) {
        (&self.word, self.distance)
    }
}

/// A ranking strategy over an ordered dictionary.
///
/// Implementations must produce the exact top-k of the full scored set:
/// ascending by distance, ties broken by ascending dictionary position.
pub trait RankEngine {
    /// Rank `dictionary` against `query` with explicit options.
    fn rank_with_options<S>(
        &self,
        query: &str,
        dictionary: &[S],
        options: &RankOptions,
    ) -> Result<Vec<ScoredWord>>
    where
        S: AsRef<str> + Sync;

    /// Rank `dictionary` against `query`, returning at most `k` results.
    ///
    /// Fails with [`WordMatchError::InvalidArgument`] when `k` is negative.
    fn rank<S>(&self, query: &str, dictionary: &[S], k: i64) -> Result<Vec<ScoredWord>>
    where
        S: AsRef<str> + Sync,
    {
        let limit = limit_from_k(k)?;
        self.rank_with_options(query, dictionary, &RankOptions::new(limit))
    }
}

/// Rank `dictionary` against `query` with a default [`Ranker`].
///
/// # Examples
///
/// ```
/// use wordmatch::rank::rank;
///
/// let dictionary = ["cat", "cats", "car", "care", "dog"];
/// let results = rank("cat", &dictionary, 3).unwrap();
/// let pairs: Vec<_> = results.iter().map(|r| r.as_pair()).collect();
/// assert_eq!(pairs, vec![("cat", 0), ("cats", 1), ("car", 1)]);
/// ```
pub fn rank<S>(query: &str, dictionary: &[S], k: i64) -> Result<Vec<ScoredWord>>
where
    S: AsRef<str> + Sync,
{
    Ranker::default().rank(query, dictionary, k)
}

/// Convert a signed result count into a limit.
pub fn limit_from_k(k: i64) -> Result<usize> {
    if k < 0 {
        return Err(WordMatchError::invalid_argument(format!(
            "k must be non-negative, got {k}"
        )));
    }
    Ok(usize::try_from(k).unwrap_or(usize::MAX))
}

/// Turn collected candidates back into owned results.
pub(crate) fn materialize<S: AsRef<str>>(
    dictionary: &[S],
    candidates: impl IntoIterator<Item = Candidate>,
) -> Vec<ScoredWord> {
    candidates
        .into_iter()
        .map(|candidate| ScoredWord {
            word: dictionary[candidate.index].as_ref().to_string(),
            distance: candidate.distance,
            index: candidate.index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_from_k() {
        assert_eq!(limit_from_k(0).unwrap(), 0);
        assert_eq!(limit_from_k(10).unwrap(), 10);
        assert!(matches!(
            limit_from_k(-1),
            Err(WordMatchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rank_free_function() {
        let dictionary = vec!["cat", "cats", "car", "care", "dog"];
        let results = rank("cat", &dictionary, 3).unwrap();
        let pairs: Vec<_> = results.iter().map(ScoredWord::as_pair).collect();
        assert_eq!(pairs, vec![("cat", 0), ("cats", 1), ("car", 1)]);
        assert_eq!(results[2].index, 2);
    }

    #[test]
    fn test_rank_negative_k() {
        let dictionary = vec!["cat"];
        let err = rank("cat", &dictionary, -3).unwrap_err();
        assert!(matches!(err, WordMatchError::InvalidArgument(_)));
    }
}
