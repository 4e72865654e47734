//! Core domain types for anagram solving
//!
//! Validated queries and the per-query solution set. Nothing here touches
//! storage; lookups go through the `Lexicon` trait in `crate::index`.

mod query;
mod solutions;

pub use query::{AnagramQuery, QueryError, distinct_arrangements};
pub use solutions::SolutionSet;
