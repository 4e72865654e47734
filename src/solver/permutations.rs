//! Pruned permutation enumeration
//!
//! Generates every distinct arrangement of a word's letters by placing one
//! letter per position and recursing on the rest. At each position a letter
//! value is placed at most once, so repeated letters never produce the same
//! arrangement twice and the number of complete arrangements equals
//! `n! / ∏ count(c)!`.

use crate::core::{QueryError, SolutionSet};
use crate::index::{IndexError, Lexicon};
use rustc_hash::FxHashSet;

/// Find every arrangement of `input` that the lexicon contains
///
/// Solutions appear in generation order, which is fixed for a given input.
/// Characters the lexicon never stores are not an error; arrangements
/// containing them simply miss.
///
/// # Errors
///
/// Returns `QueryError::Empty` for empty input and `QueryError::Index` if a
/// lookup fails in storage.
///
/// # Examples
/// ```
/// use anagram_solver::index::MemoryIndex;
/// use anagram_solver::solver::enumerate;
///
/// let index: MemoryIndex = ["was", "saw"].into_iter().collect();
/// let solutions = enumerate("was", &index).unwrap();
/// assert_eq!(solutions.words(), &["was", "saw"]);
/// ```
pub fn enumerate<L: Lexicon + ?Sized>(input: &str, lexicon: &L) -> Result<SolutionSet, QueryError> {
    if input.is_empty() {
        return Err(QueryError::Empty);
    }

    let letters: Vec<char> = input.chars().collect();
    let mut solutions = SolutionSet::new(input);
    place(&letters, 0, lexicon, &mut solutions)?;

    Ok(solutions)
}

/// Fill position `start` with each distinct remaining letter in turn
///
/// Every branch swaps on its own copy of `arrangement`; siblings always start
/// from the unmodified parent.
fn place<L: Lexicon + ?Sized>(
    arrangement: &[char],
    start: usize,
    lexicon: &L,
    solutions: &mut SolutionSet,
) -> Result<(), IndexError> {
    if start + 1 == arrangement.len() {
        let candidate: String = arrangement.iter().collect();
        solutions.record_arrangement();
        if lexicon.contains(&candidate)? {
            solutions.push(candidate);
        }
        return Ok(());
    }

    let mut placed = FxHashSet::default();
    for i in start..arrangement.len() {
        if !placed.insert(arrangement[i]) {
            continue;
        }

        let mut branch = arrangement.to_vec();
        branch.swap(start, i);
        place(&branch, start + 1, lexicon, solutions)?;
    }

    Ok(())
}
