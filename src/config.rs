//! Runtime configuration
//!
//! Where the word index lives and which word list populates it.

use std::path::PathBuf;

/// Default index directory, relative to the working directory
pub const DEFAULT_DB_DIR: &str = "dictionaryDB";

/// Default word list, one word per line
pub const DEFAULT_WORDS_FILE: &str = "words_alpha.txt";

/// Default LMDB map size in MiB
pub const DEFAULT_MAP_SIZE_MB: usize = 256;

/// Configuration for opening and populating the word index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub db_path: PathBuf,
    pub words_path: PathBuf,
    /// Maximum size of the memory map, in bytes
    pub map_size: usize,
}

impl IndexConfig {
    #[must_use]
    pub fn new(db_path: impl Into<PathBuf>, words_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            words_path: words_path.into(),
            map_size: DEFAULT_MAP_SIZE_MB * 1024 * 1024,
        }
    }

    /// Override the map size, given in MiB
    #[must_use]
    pub fn with_map_size_mb(mut self, megabytes: usize) -> Self {
        self.map_size = megabytes * 1024 * 1024;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_DIR, DEFAULT_WORDS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = IndexConfig::default();
        assert_eq!(config.db_path, PathBuf::from("dictionaryDB"));
        assert_eq!(config.words_path, PathBuf::from("words_alpha.txt"));
        assert_eq!(config.map_size, 256 * 1024 * 1024);
    }

    #[test]
    fn map_size_override() {
        let config = IndexConfig::new("db", "words.txt").with_map_size_mb(16);
        assert_eq!(config.map_size, 16 * 1024 * 1024);
        assert_eq!(config.db_path, PathBuf::from("db"));
    }
}
