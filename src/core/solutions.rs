//! Solution set accumulated by a single anagram query

use std::fmt;

/// Dictionary words found among the arrangements of one input
///
/// Words are kept in generation order. The enumerator never produces the
/// same arrangement twice, so no deduplication happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    input: String,
    words: Vec<String>,
    arrangements_checked: u64,
}

impl SolutionSet {
    /// Create an empty solution set for `input`
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            words: Vec::new(),
            arrangements_checked: 0,
        }
    }

    pub(crate) fn record_arrangement(&mut self) {
        self.arrangements_checked += 1;
    }

    pub(crate) fn push(&mut self, word: String) {
        self.words.push(word);
    }

    /// The input these solutions were generated from
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Valid words in generation order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of complete arrangements tested against the index
    #[inline]
    #[must_use]
    pub const fn arrangements_checked(&self) -> u64 {
        self.arrangements_checked
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Consume the set, returning the words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Formats as a bracketed list, e.g. `[was, saw]`
impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = SolutionSet::new("was");
        assert_eq!(set.input(), "was");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.arrangements_checked(), 0);
    }

    #[test]
    fn push_keeps_generation_order() {
        let mut set = SolutionSet::new("was");
        set.push("was".to_string());
        set.push("saw".to_string());

        assert_eq!(set.words(), &["was", "saw"]);
        assert!(set.contains("saw"));
        assert!(!set.contains("aws"));
    }

    #[test]
    fn arrangements_are_counted() {
        let mut set = SolutionSet::new("ab");
        set.record_arrangement();
        set.record_arrangement();
        assert_eq!(set.arrangements_checked(), 2);
    }

    #[test]
    fn display_formats_as_list() {
        let mut set = SolutionSet::new("it");
        assert_eq!(set.to_string(), "[]");

        set.push("it".to_string());
        set.push("ti".to_string());
        assert_eq!(set.to_string(), "[it, ti]");
    }

    #[test]
    fn iterates_by_reference() {
        let mut set = SolutionSet::new("it");
        set.push("it".to_string());

        let collected: Vec<&String> = (&set).into_iter().collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(set.into_words(), vec!["it".to_string()]);
    }
}
