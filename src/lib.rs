//! Anagram Solver
//!
//! Finds every dictionary word that can be spelled with exactly the letters of
//! an input, backed by a persistent LMDB word index.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::index::MemoryIndex;
//! use anagram_solver::solver::enumerate;
//!
//! let index: MemoryIndex = ["it", "ti", "was", "saw"].into_iter().collect();
//!
//! let solutions = enumerate("was", &index).unwrap();
//! assert_eq!(solutions.words(), &["was", "saw"]);
//! ```

// Core domain types
pub mod core;

// Runtime configuration
pub mod config;

// Word index storage
pub mod index;

// Solving algorithms
pub mod solver;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
