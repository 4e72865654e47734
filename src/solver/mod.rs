//! Anagram solving
//!
//! Permutation enumeration filtered by dictionary membership.

mod permutations;

pub use permutations::enumerate;
