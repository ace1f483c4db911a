//! # wordmatch
//!
//! Approximate string matching against a word list: rank every dictionary
//! word by Levenshtein distance to a query and keep the closest matches.
//!
//! ## Features
//!
//! - Exact edit distance over Unicode scalar values in O(min(n, m)) memory
//! - Exact top-k ranking with a stable tie-break on dictionary order
//! - Optional parallel scoring with results identical to the sequential path
//! - Line-oriented dictionary loading and a small CLI
//!
//! ```
//! use wordmatch::{distance, rank};
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//!
//! let dictionary = ["cat", "cats", "car", "care", "dog"];
//! let best = rank("cat", &dictionary, 1).unwrap();
//! assert_eq!(best[0].as_pair(), ("cat", 0));
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod parallel;
pub mod rank;

pub use distance::levenshtein_distance as distance;
pub use rank::rank;

pub mod prelude {
    pub use crate::config::WordMatchConfig;
    pub use crate::dictionary::Dictionary;
    pub use crate::distance::{LevenshteinMatcher, levenshtein_distance};
    pub use crate::error::{Result, WordMatchError};
    pub use crate::parallel::{ParallelRankConfig, ParallelRanker};
    pub use crate::rank::{RankEngine, RankOptions, Ranker, RankerConfig, ScoredWord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
