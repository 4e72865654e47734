//! Word sources
//!
//! Line-oriented word list reading for index population, plus the sample
//! inputs embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_INPUTS, SAMPLE_INPUTS_COUNT};
pub use loader::{SourceError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_INPUTS.len(), SAMPLE_INPUTS_COUNT);
    }

    #[test]
    fn samples_are_valid_queries() {
        for &input in SAMPLE_INPUTS {
            assert!(!input.is_empty(), "Empty sample input");
            assert!(
                input.chars().all(|c| c.is_ascii_lowercase()),
                "Sample '{input}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn samples_start_with_single_letter() {
        assert_eq!(SAMPLE_INPUTS.first(), Some(&"i"));
        assert!(SAMPLE_INPUTS.contains(&"jazziness"));
    }
}
