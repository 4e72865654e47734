//! In-memory word index

use super::{IndexError, Lexicon};
use rustc_hash::FxHashSet;

/// A word set held entirely in memory
///
/// Answers the same membership queries as `WordIndex` without touching disk.
///
/// # Examples
/// ```
/// use anagram_solver::index::{Lexicon, MemoryIndex};
///
/// let index: MemoryIndex = ["was", "saw"].into_iter().collect();
/// assert!(index.contains("saw").unwrap());
/// assert!(!index.contains("aws").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    words: FxHashSet<String>,
}

impl MemoryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning false if it was already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Lexicon for MemoryIndex {
    fn contains(&self, word: &str) -> Result<bool, IndexError> {
        Ok(self.words.contains(word))
    }
}
