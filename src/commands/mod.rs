//! Command implementations

pub mod lookup;
pub mod populate;
pub mod solve;

pub use lookup::{LookupResult, lookup_words};
pub use populate::{PopulateReport, ensure_populated, populate_from};
pub use solve::{QueryReport, SolveConfig, SolveResult, solve_all, solve_query};
