//! Anagram query representation
//!
//! An `AnagramQuery` is a validated input string whose letters define the
//! arrangement space the enumerator walks.

use crate::index::IndexError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Errors raised before or during enumeration of a query
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("anagram input must contain at least one letter")]
    Empty,

    #[error(
        "'{input}' contains '{found}' at position {position}; only lowercase ASCII letters are accepted"
    )]
    InvalidCharacter {
        input: String,
        found: char,
        position: usize,
    },

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// A validated anagram input of lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramQuery {
    text: String,
}

impl AnagramQuery {
    /// Create a query from user input
    ///
    /// # Errors
    /// Returns `QueryError` if:
    /// - The input is empty
    /// - Any character is outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::AnagramQuery;
    ///
    /// let query = AnagramQuery::new("listen").unwrap();
    /// assert_eq!(query.text(), "listen");
    ///
    /// assert!(AnagramQuery::new("").is_err());
    /// assert!(AnagramQuery::new("Listen").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, QueryError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(QueryError::Empty);
        }

        if let Some((position, found)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(QueryError::InvalidCharacter {
                input: text,
                found,
                position,
            });
        }

        Ok(Self { text })
    }

    /// Get the query as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the query
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated query
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of distinct arrangements of the query's letters
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    #[must_use]
    pub fn distinct_arrangements(&self) -> Option<u128> {
        distinct_arrangements(&self.text)
    }
}

impl fmt::Display for AnagramQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Count the distinct arrangements of the characters of `text`
///
/// Computes `n! / ∏ count(c)!` as a product of binomial coefficients so
/// intermediate values stay as small as the result allows.
///
/// # Examples
/// ```
/// use anagram_solver::core::distinct_arrangements;
///
/// assert_eq!(distinct_arrangements("aab"), Some(3));
/// assert_eq!(distinct_arrangements("abc"), Some(6));
/// ```
#[must_use]
pub fn distinct_arrangements(text: &str) -> Option<u128> {
    let mut counts: FxHashMap<char, u128> = FxHashMap::default();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut placed: u128 = 0;
    let mut total: u128 = 1;
    for count in counts.into_values() {
        // Multiply by C(placed + count, count), one factor at a time
        for k in 1..=count {
            placed += 1;
            total = total.checked_mul(placed)? / k;
        }
    }

    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_creation_valid() {
        let query = AnagramQuery::new("elbows").unwrap();
        assert_eq!(query.text(), "elbows");
        assert_eq!(query.len(), 6);
        assert!(!query.is_empty());
    }

    #[test]
    fn query_single_letter() {
        let query = AnagramQuery::new("i").unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.distinct_arrangements(), Some(1));
    }

    #[test]
    fn query_rejects_empty() {
        assert!(matches!(AnagramQuery::new(""), Err(QueryError::Empty)));
    }

    #[test]
    fn query_rejects_uppercase() {
        let err = AnagramQuery::new("waS").unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidCharacter {
                found: 'S',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn query_rejects_punctuation_and_digits() {
        assert!(AnagramQuery::new("it's").is_err());
        assert!(AnagramQuery::new("w4s").is_err());
        assert!(AnagramQuery::new("two words").is_err());
        assert!(AnagramQuery::new("café").is_err());
    }

    #[test]
    fn invalid_character_message_names_the_character() {
        let err = AnagramQuery::new("a-b").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'-'"));
        assert!(message.contains("position 1"));
    }

    #[test]
    fn arrangements_all_unique() {
        assert_eq!(distinct_arrangements("abc"), Some(6));
        assert_eq!(distinct_arrangements("mouth"), Some(120));
    }

    #[test]
    fn arrangements_with_repeats() {
        assert_eq!(distinct_arrangements("aab"), Some(3));
        assert_eq!(distinct_arrangements("aabb"), Some(6));
        // 9! / (2! * 2!)
        assert_eq!(distinct_arrangements("jazziness"), Some(90_720));
    }

    #[test]
    fn arrangements_all_same() {
        assert_eq!(distinct_arrangements("aaa"), Some(1));
        assert_eq!(distinct_arrangements("z"), Some(1));
    }

    #[test]
    fn arrangements_empty_is_one() {
        assert_eq!(distinct_arrangements(""), Some(1));
    }

    #[test]
    fn arrangements_overflow_is_none() {
        let long: String = ('a'..='z').chain('A'..='Z').collect();
        assert_eq!(distinct_arrangements(&long), None);
    }
}
