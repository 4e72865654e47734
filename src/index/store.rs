//! Persistent word index backed by LMDB
//!
//! The index is a single named database mapping each word to a unit value.
//! Population is staged in memory and written by `commit` in one write
//! transaction, so a store on disk is either empty or fully populated.

use super::{IndexError, Lexicon};
use crate::config::IndexConfig;
use crate::wordlists::SourceError;
use heed3::types::{Str, Unit};
use heed3::{Database, Env, EnvOpenOptions, RoTxn, WithTls};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const WORDS_DB: &str = "dictionary";

/// Longest word LMDB accepts as a key
pub const MAX_WORD_BYTES: usize = 511;

/// What `populate` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulateOutcome {
    /// The index already held words; the source was not read
    AlreadyPopulated,
    /// Words were staged for the next `commit`
    Populated { words: usize, skipped: usize },
}

/// Snapshot of the index state for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub path: PathBuf,
    pub committed: u64,
    pub pending: usize,
}

/// Durable, queryable set of known words
pub struct WordIndex {
    env: Env<WithTls>,
    words: Database<Str, Unit>,
    pending: FxHashSet<String>,
    path: PathBuf,
}

impl WordIndex {
    /// Open the index described by `config`
    ///
    /// # Errors
    ///
    /// See [`WordIndex::open_at`].
    pub fn open(config: &IndexConfig) -> Result<Self, IndexError> {
        Self::open_at(&config.db_path, config.map_size)
    }

    /// Open the index at `path`, creating an empty one if none exists
    ///
    /// # Errors
    ///
    /// Returns `IndexError::CreateDir` if the directory cannot be created and
    /// `IndexError::Open` if LMDB rejects it (permissions, corruption, no space).
    pub fn open_at(path: impl AsRef<Path>, map_size: usize) -> Result<Self, IndexError> {
        let path = path.as_ref();

        fs::create_dir_all(path).map_err(|source| IndexError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

        let (env, words) = open_words_db(path, map_size).map_err(|source| IndexError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "opened word index");

        Ok(Self {
            env,
            words,
            pending: FxHashSet::default(),
            path: path.to_path_buf(),
        })
    }

    /// Location of the store on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether population has ever occurred
    ///
    /// Words staged by `populate` but not yet committed count as populated.
    ///
    /// # Errors
    ///
    /// Returns an error if a read transaction cannot be opened.
    pub fn is_empty(&self) -> Result<bool, IndexError> {
        if !self.pending.is_empty() {
            return Ok(false);
        }
        let rtxn = self.env.read_txn()?;
        Ok(self.words.is_empty(&rtxn)?)
    }

    /// Number of words, committed and pending
    ///
    /// # Errors
    ///
    /// Returns an error if a read transaction cannot be opened.
    pub fn len(&self) -> Result<u64, IndexError> {
        let rtxn = self.env.read_txn()?;
        Ok(self.words.len(&rtxn)? + self.pending.len() as u64)
    }

    /// Report location and counts
    ///
    /// # Errors
    ///
    /// Returns an error if a read transaction cannot be opened.
    pub fn summary(&self) -> Result<IndexSummary, IndexError> {
        let rtxn = self.env.read_txn()?;
        Ok(IndexSummary {
            path: self.path.clone(),
            committed: self.words.len(&rtxn)?,
            pending: self.pending.len(),
        })
    }

    /// Stage every word of `source` for insertion
    ///
    /// Does nothing if the index is not empty. Staged words are visible to
    /// lookups at once and reach disk on `commit`. If the source fails, all
    /// words staged by this call are discarded.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Source` if the source fails, or a storage error if
    /// emptiness cannot be checked.
    pub fn populate<I>(&mut self, source: I) -> Result<PopulateOutcome, IndexError>
    where
        I: IntoIterator<Item = Result<String, SourceError>>,
    {
        if !self.is_empty()? {
            info!(path = %self.path.display(), "word index already populated");
            return Ok(PopulateOutcome::AlreadyPopulated);
        }

        let mut staged = FxHashSet::default();
        let mut skipped = 0;

        for word in source {
            let word = match word {
                Ok(word) => word,
                Err(err) => {
                    warn!(staged = staged.len(), "word source failed, discarding staged words");
                    return Err(err.into());
                }
            };

            if word.is_empty() || word.len() > MAX_WORD_BYTES {
                warn!(length = word.len(), "skipping word outside LMDB key limits");
                skipped += 1;
                continue;
            }

            staged.insert(word);
        }

        let words = staged.len();
        self.pending = staged;
        info!(words, skipped, "staged words for word index");

        Ok(PopulateOutcome::Populated { words, skipped })
    }

    /// Write all staged words to disk in one transaction
    ///
    /// Returns the number of words written. Staged words are kept if the
    /// write fails.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write transaction fails.
    pub fn commit(&mut self) -> Result<usize, IndexError> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let mut sorted: Vec<&str> = self.pending.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let mut wtxn = self.env.write_txn()?;
        for &word in &sorted {
            self.words.put(&mut wtxn, word, &())?;
        }
        wtxn.commit()?;

        let written = sorted.len();
        self.pending.clear();
        info!(words = written, "committed word index");

        Ok(written)
    }

    /// Open a read snapshot for a batch of lookups
    ///
    /// # Errors
    ///
    /// Returns an error if a read transaction cannot be opened.
    pub fn reader(&self) -> Result<IndexReader<'_>, IndexError> {
        Ok(IndexReader {
            rtxn: self.env.read_txn()?,
            words: self.words,
            pending: &self.pending,
        })
    }

    /// Release the environment
    ///
    /// Uncommitted words are discarded.
    pub fn close(self) {
        if !self.pending.is_empty() {
            warn!(
                words = self.pending.len(),
                "closing word index with uncommitted words"
            );
        }

        let path = self.path;
        self.env.prepare_for_closing().wait();
        debug!(path = %path.display(), "closed word index");
    }
}

impl Lexicon for WordIndex {
    fn contains(&self, word: &str) -> Result<bool, IndexError> {
        self.reader()?.contains(word)
    }
}

/// Read snapshot of a `WordIndex`
///
/// Holds one LMDB read transaction for its lifetime, so an enumeration does
/// all of its lookups against the same snapshot.
pub struct IndexReader<'a> {
    rtxn: RoTxn<'a, WithTls>,
    words: Database<Str, Unit>,
    pending: &'a FxHashSet<String>,
}

impl Lexicon for IndexReader<'_> {
    fn contains(&self, word: &str) -> Result<bool, IndexError> {
        if self.pending.contains(word) {
            return Ok(true);
        }
        if word.is_empty() || word.len() > MAX_WORD_BYTES {
            return Ok(false);
        }
        Ok(self.words.get(&self.rtxn, word)?.is_some())
    }
}

fn open_words_db(
    path: &Path,
    map_size: usize,
) -> heed3::Result<(Env<WithTls>, Database<Str, Unit>)> {
    let env = open_env(path, map_size)?;

    let mut wtxn = env.write_txn()?;
    let words = env.create_database(&mut wtxn, Some(WORDS_DB))?;
    wtxn.commit()?;

    Ok((env, words))
}

#[allow(unsafe_code)]
fn open_env(path: &Path, map_size: usize) -> heed3::Result<Env<WithTls>> {
    // SAFETY: each WordIndex owns its environment and the process opens a
    // given directory at most once at a time.
    unsafe {
        EnvOpenOptions::new()
            .map_size(map_size)
            .max_dbs(1)
            .open(path)
    }
}
