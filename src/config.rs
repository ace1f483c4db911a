//! Top-level configuration, loadable from a JSON file.
//!
//! ```json
//! {
//!   "ranker": { "default_limit": 5, "max_input_chars": 256 },
//!   "parallel": { "thread_pool_size": 4, "min_chunk_size": 8192 }
//! }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordMatchError};
use crate::parallel::ParallelRankConfig;
use crate::rank::RankerConfig;

/// Configuration for ranking, sequential and parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordMatchConfig {
    /// Sequential ranker settings. Also the limits used by parallel ranking.
    pub ranker: RankerConfig,

    /// Worker pool settings for parallel ranking.
    pub parallel: ParallelRankConfig,
}

impl WordMatchConfig {
    /// Load and validate a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: WordMatchConfig = serde_json::from_str(&content).map_err(|e| {
            WordMatchError::config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.ranker.validate()?;
        self.parallel.validate()
    }

    /// Parallel settings with the shared ranker limits applied.
    pub fn parallel_config(&self) -> ParallelRankConfig {
        ParallelRankConfig {
            ranker: self.ranker.clone(),
            ..self.parallel.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordMatchConfig::default();
        assert_eq!(config.ranker.default_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ranker": {{"default_limit": 5, "max_input_chars": 64}}, "parallel": {{"thread_pool_size": 2}}}}"#
        )
        .unwrap();

        let config = WordMatchConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.ranker.default_limit, 5);
        assert_eq!(config.ranker.max_input_chars, Some(64));
        assert_eq!(config.parallel.thread_pool_size, Some(2));
        assert_eq!(config.parallel.min_chunk_size, 4096);

        let parallel = config.parallel_config();
        assert_eq!(parallel.thread_pool_size, Some(2));
        assert_eq!(parallel.ranker.max_input_chars, Some(64));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            WordMatchConfig::load_from_file(file.path()),
            Err(WordMatchError::Config(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"parallel": {{"min_chunk_size": 0}}}}"#).unwrap();
        assert!(matches!(
            WordMatchConfig::load_from_file(file.path()),
            Err(WordMatchError::Config(_))
        ));
    }
}
