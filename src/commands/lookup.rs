//! Dictionary lookup command

use crate::index::{IndexError, Lexicon};

/// Membership of a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
}

/// Check each word against the lexicon, in order
///
/// # Errors
///
/// Returns an error if a lookup fails in storage.
pub fn lookup_words<L: Lexicon + ?Sized>(
    words: &[String],
    lexicon: &L,
) -> Result<Vec<LookupResult>, IndexError> {
    words
        .iter()
        .map(|word| {
            Ok(LookupResult {
                word: word.clone(),
                found: lexicon.contains(word)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryIndex;

    #[test]
    fn reports_found_and_missing() {
        let index: MemoryIndex = ["cranium"].into_iter().collect();
        let words = vec!["cranium".to_string(), "muniarc".to_string()];

        let results = lookup_words(&words, &index).unwrap();
        assert_eq!(
            results,
            vec![
                LookupResult {
                    word: "cranium".to_string(),
                    found: true
                },
                LookupResult {
                    word: "muniarc".to_string(),
                    found: false
                },
            ]
        );
    }

    #[test]
    fn no_words_no_results() {
        let results = lookup_words(&[], &MemoryIndex::new()).unwrap();
        assert!(results.is_empty());
    }
}
