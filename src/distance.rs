//! Levenshtein edit distance.
//!
//! The distance between two strings is the minimum number of single-character
//! insertions, deletions, or substitutions required to change one into the
//! other. Characters are Unicode scalar values; no case folding or
//! normalization is applied.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// Uses the Wagner-Fischer recurrence over a single rolling row, with the
/// shorter string as the inner dimension, so working memory is
/// O(min(|s1|, |s2|)).
///
/// # Examples
///
/// ```
/// use wordmatch::distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let (long, short) = if len1 >= len2 { (s1, s2) } else { (s2, s1) };

    let short_chars: Vec<char> = short.chars().collect();
    char_distance(long.chars(), &short_chars)
}

/// Edit distance between a stream of characters and a decoded slice.
///
/// Only `short` is held in memory; `long` is consumed one character per row.
/// Passing the longer operand as `long` keeps the row at O(min(n, m)).
pub(crate) fn char_distance<I>(long: I, short: &[char]) -> usize
where
    I: Iterator<Item = char>,
{
    if short.is_empty() {
        return long.count();
    }

    // row[j] holds the distance between the processed prefix of `long` and
    // short[..j]. Before the first pass it is the base row 0..=len(short).
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, long_ch) in long.enumerate() {
        // prev_row[j - 1], overwritten one step earlier
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &short_ch) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(long_ch != short_ch);

            row[j + 1] = min(
                min(
                    above + 1,  // deletion
                    row[j] + 1, // insertion
                ),
                diagonal + cost, // substitution
            );
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Distance calculator bound to a single query string.
///
/// Ranking compares one query against many candidates, so the query is
/// decoded into characters once up front.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();
        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of characters in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        self.distance_with_len(candidate, candidate.chars().count())
    }

    /// Distance to a candidate whose character count the caller already has.
    ///
    /// The candidate is copied only when it is shorter than the query;
    /// otherwise its characters stream over the stored query row.
    pub(crate) fn distance_with_len(&self, candidate: &str, candidate_len: usize) -> usize {
        if candidate_len >= self.query_chars.len() {
            char_distance(candidate.chars(), &self.query_chars)
        } else {
            let candidate_chars: Vec<char> = candidate.chars().collect();
            char_distance(self.query_chars.iter().copied(), &candidate_chars)
        }
    }
}
