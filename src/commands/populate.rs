//! Index population command
//!
//! Fills an empty word index from the word list and commits it, or reports
//! that population already happened.

use crate::index::{IndexError, PopulateOutcome, WordIndex};
use crate::wordlists::{SourceError, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of ensuring the index is populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateReport {
    AlreadyPopulated,
    Populated {
        committed: usize,
        skipped: usize,
        duration: Duration,
    },
}

/// Populate the index from `words_path` if it is empty
///
/// The word list is only opened when population is needed.
///
/// # Errors
///
/// Returns `IndexError::Source` if the word list is missing or unreadable, in
/// which case nothing is committed, or a storage error if the commit fails.
pub fn ensure_populated(
    index: &mut WordIndex,
    words_path: &Path,
    show_progress: bool,
) -> Result<PopulateReport, IndexError> {
    if !index.is_empty()? {
        return Ok(PopulateReport::AlreadyPopulated);
    }

    let source = WordSource::open(words_path)?;
    let progress = if show_progress {
        word_spinner()
    } else {
        ProgressBar::hidden()
    };

    populate_from(index, source, &progress)
}

/// Populate and commit from any word source, counting words on `progress`
///
/// # Errors
///
/// Same as [`ensure_populated`].
pub fn populate_from<I>(
    index: &mut WordIndex,
    source: I,
    progress: &ProgressBar,
) -> Result<PopulateReport, IndexError>
where
    I: IntoIterator<Item = Result<String, SourceError>>,
{
    let start = Instant::now();
    progress.set_message("populating dictionary");

    let counted = source.into_iter().inspect(|_| progress.inc(1));
    let outcome = match index.populate(counted) {
        Ok(outcome) => outcome,
        Err(err) => {
            progress.abandon_with_message("population failed");
            return Err(err);
        }
    };

    match outcome {
        PopulateOutcome::AlreadyPopulated => {
            progress.finish_and_clear();
            Ok(PopulateReport::AlreadyPopulated)
        }
        PopulateOutcome::Populated { skipped, .. } => {
            progress.set_message("committing");
            let committed = index.commit()?;
            progress.finish_with_message("dictionary populated");

            Ok(PopulateReport::Populated {
                committed,
                skipped,
                duration: start.elapsed(),
            })
        }
    }
}

fn word_spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} words added ({per_sec}) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
