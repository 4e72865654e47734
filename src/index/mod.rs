//! Word index
//!
//! Membership lookups for the enumerator. `WordIndex` is the persistent
//! LMDB-backed store used by the binary; `MemoryIndex` holds a word set in
//! memory for tests and embedding.

mod memory;
mod store;

pub use memory::MemoryIndex;
pub use store::{IndexReader, IndexSummary, MAX_WORD_BYTES, PopulateOutcome, WordIndex};

use crate::wordlists::SourceError;
use std::path::PathBuf;

/// A set of known words that can answer membership queries
pub trait Lexicon {
    /// Check whether `word` is a known word
    ///
    /// A miss is `Ok(false)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying storage fails.
    fn contains(&self, word: &str) -> Result<bool, IndexError>;
}

/// Errors raised by the word index
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot create word index directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open word index at {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: heed3::Error,
    },

    #[error("word index storage failure")]
    Storage(#[from] heed3::Error),

    #[error("word source failed during population; nothing was committed")]
    Source(#[from] SourceError),
}
