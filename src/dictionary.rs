//! Word list loading.
//!
//! A dictionary is a plain ordered list of words, one per line. Order is
//! preserved, duplicates are kept, and blank lines stay in the list as
//! empty entries so that positions match the source; rankers skip them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;

/// An ordered word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words in order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one word per line from `reader`, trimming surrounding whitespace.
    ///
    /// Lines must be valid UTF-8. A read error names the 1-based line it
    /// occurred on.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| io::Error::new(e.kind(), format!("line {}: {e}", number + 1)))?;
            words.push(line.trim().to_string());
        }
        Ok(Dictionary { words })
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} entries ({} non-blank) from {}",
            dictionary.len(),
            dictionary.non_blank_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Append a word.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// All entries in source order, blanks included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries, blanks included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of entries a ranker will actually score.
    pub fn non_blank_count(&self) -> usize {
        self.words.iter().filter(|w| !w.is_empty()).count()
    }
}

impl AsRef<[String]> for Dictionary {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
