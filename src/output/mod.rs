//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_index_summary, print_lookup_results, print_populate_report, print_solve_result,
};
