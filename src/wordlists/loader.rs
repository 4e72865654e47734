//! Word list loading utilities
//!
//! A `WordSource` yields one word per non-blank line, lazily, so population
//! never holds the raw file in memory.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Errors from reading a word list
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("word list {} is unavailable", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line} of the word list")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Lazy sequence of words read line by line
///
/// Surrounding whitespace (including `\r` from CRLF files) is trimmed and
/// blank lines are skipped. Words are otherwise passed through unchanged.
pub struct WordSource<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl WordSource<BufReader<File>> {
    /// Open a word list file
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the file cannot be opened.
    ///
    /// # Examples
    /// ```no_run
    /// use anagram_solver::wordlists::WordSource;
    ///
    /// let source = WordSource::open("words_alpha.txt").unwrap();
    /// let words: Vec<String> = source.map(Result::unwrap).collect();
    /// println!("Loaded {} words", words.len());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> WordSource<R> {
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for WordSource<R> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;

            match line {
                Ok(text) => {
                    let word = text.trim();
                    if !word.is_empty() {
                        return Some(Ok(word.to_string()));
                    }
                }
                Err(source) => {
                    return Some(Err(SourceError::Read {
                        line: self.line,
                        source,
                    }));
                }
            }
        }
    }
}

/// Present an in-memory slice as a word source
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::words_from_slice;
///
/// let words: Vec<String> = words_from_slice(&["it", "ti"]).map(Result::unwrap).collect();
/// assert_eq!(words, ["it", "ti"]);
/// ```
pub fn words_from_slice<'a>(
    slice: &'a [&str],
) -> impl Iterator<Item = Result<String, SourceError>> + 'a {
    slice.iter().map(|&word| Ok(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn collect(source: impl Iterator<Item = Result<String, SourceError>>) -> Vec<String> {
        source.map(Result::unwrap).collect()
    }

    #[test]
    fn reads_one_word_per_line() {
        let source = WordSource::from_reader(Cursor::new("it\nti\nwas\nsaw\n"));
        assert_eq!(collect(source), ["it", "ti", "was", "saw"]);
    }

    #[test]
    fn trims_crlf_and_skips_blank_lines() {
        let source = WordSource::from_reader(Cursor::new("hand\r\n\r\n  mouth \n\n"));
        assert_eq!(collect(source), ["hand", "mouth"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let source = WordSource::from_reader(Cursor::new(""));
        assert!(collect(source).is_empty());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordSource::open(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "elbows\nbelows\nbowels\n").unwrap();

        let source = WordSource::open(&path).unwrap();
        assert_eq!(collect(source), ["elbows", "belows", "bowels"]);
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let bytes: &[u8] = b"it\n\xff\xfe\nwas\n";
        let mut source = WordSource::from_reader(Cursor::new(bytes));

        assert_eq!(source.next().unwrap().unwrap(), "it");
        let err = source.next().unwrap().unwrap_err();
        assert!(matches!(err, SourceError::Read { line: 2, .. }));
    }

    #[test]
    fn slice_source_preserves_order() {
        assert_eq!(collect(words_from_slice(&["was", "saw"])), ["was", "saw"]);
    }

    #[test]
    fn reader_is_consumed_lazily() {
        struct Counting<'a> {
            inner: Cursor<&'a str>,
            reads: &'a std::cell::Cell<usize>,
        }
        impl Read for Counting<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.reads.set(self.reads.get() + 1);
                let n = 1.min(buf.len());
                self.inner.read(&mut buf[..n])
            }
        }

        let reads = std::cell::Cell::new(0);
        let reader = BufReader::with_capacity(
            1,
            Counting {
                inner: Cursor::new("it\nti\nwas\n"),
                reads: &reads,
            },
        );
        let mut source = WordSource::from_reader(reader);

        assert_eq!(source.next().unwrap().unwrap(), "it");
        let after_first = reads.get();
        assert!(after_first < "it\nti\nwas\n".len());
    }
}
