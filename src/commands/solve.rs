//! Anagram solving command
//!
//! Validates a batch of inputs, solves each one and records timing.

use crate::core::{AnagramQuery, QueryError, SolutionSet};
use crate::index::{Lexicon, WordIndex};
use crate::solver::enumerate;
use crate::wordlists::SAMPLE_INPUTS;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a batch of anagram queries
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub inputs: Vec<String>,
    /// Solve independent inputs on the rayon pool
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            parallel: false,
        }
    }

    /// Use the embedded sample inputs
    #[must_use]
    pub fn samples() -> Self {
        Self::new(SAMPLE_INPUTS.iter().map(|&s| s.to_string()).collect())
    }
}

/// Outcome of one query
#[derive(Debug)]
pub struct QueryReport {
    pub solutions: SolutionSet,
    pub duration: Duration,
}

/// Outcome of a batch, in input order
#[derive(Debug)]
pub struct SolveResult {
    pub reports: Vec<QueryReport>,
    pub duration: Duration,
}

impl SolveResult {
    /// Total dictionary words found across all queries
    #[must_use]
    pub fn total_solutions(&self) -> usize {
        self.reports.iter().map(|r| r.solutions.len()).sum()
    }

    /// Total arrangements tested across all queries
    #[must_use]
    pub fn total_arrangements(&self) -> u64 {
        self.reports
            .iter()
            .map(|r| r.solutions.arrangements_checked())
            .sum()
    }
}

/// Solve a single validated query against any lexicon
///
/// # Errors
///
/// Returns an error if a lookup fails in storage.
pub fn solve_query<L: Lexicon + ?Sized>(
    query: &AnagramQuery,
    lexicon: &L,
) -> Result<QueryReport, QueryError> {
    let start = Instant::now();
    let solutions = enumerate(query.text(), lexicon)?;
    let duration = start.elapsed();

    debug!(
        input = query.text(),
        solutions = solutions.len(),
        arrangements = solutions.arrangements_checked(),
        elapsed_ms = duration.as_millis() as u64,
        "solved query"
    );

    Ok(QueryReport {
        solutions,
        duration,
    })
}

/// Solve every input in `config` against the word index
///
/// All inputs are validated before any enumeration starts.
///
/// # Errors
///
/// Returns `QueryError` if any input is invalid or a lookup fails.
pub fn solve_all(config: &SolveConfig, index: &WordIndex) -> Result<SolveResult, QueryError> {
    let queries = config
        .inputs
        .iter()
        .map(|input| AnagramQuery::new(input.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();

    let reports = if config.parallel {
        // Each worker takes its own read snapshot
        queries
            .par_iter()
            .map(|query| {
                let reader = index.reader()?;
                solve_query(query, &reader)
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let reader = index.reader()?;
        queries
            .iter()
            .map(|query| solve_query(query, &reader))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(SolveResult {
        reports,
        duration: start.elapsed(),
    })
}
