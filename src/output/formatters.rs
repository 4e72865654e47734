//! Formatting utilities for terminal output

use std::time::Duration;

/// Format words as a bracketed, comma-separated list
#[must_use]
pub fn format_word_list(words: &[String]) -> String {
    format!("[{}]", words.join(", "))
}

/// Format a duration as whole milliseconds
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// Format a count with thousands separators
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Pick the singular or plural noun for `count`
#[must_use]
pub const fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_empty() {
        assert_eq!(format_word_list(&[]), "[]");
    }

    #[test]
    fn word_list_several() {
        let words = vec!["was".to_string(), "saw".to_string()];
        assert_eq!(format_word_list(&words), "[was, saw]");
    }

    #[test]
    fn millis_truncates() {
        assert_eq!(format_millis(Duration::from_micros(1_999)), "1ms");
        assert_eq!(format_millis(Duration::ZERO), "0ms");
    }

    #[test]
    fn count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(90_720), "90,720");
        assert_eq!(format_count(370_105), "370,105");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(2, "word", "words"), "words");
    }
}
