//! Display functions for command results

use super::formatters::{format_count, format_millis, format_word_list, plural};
use crate::commands::{LookupResult, PopulateReport, SolveResult};
use crate::index::IndexSummary;
use colored::Colorize;

/// Print every query of a batch followed by a summary
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    for report in &result.reports {
        let solutions = &report.solutions;
        let words = format_word_list(solutions.words());

        println!(
            "Solutions for {}: {}",
            solutions.input().bright_yellow().bold(),
            if solutions.is_empty() {
                words.bright_black()
            } else {
                words.green()
            }
        );
        println!("Time taken: {}", format_millis(report.duration).cyan());

        if verbose {
            println!(
                "  Arrangements checked: {}",
                format_count(solutions.arrangements_checked())
            );
        }
    }

    let total = result.total_solutions();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} across {} {} in {}",
        format_count(total as u64).bright_yellow().bold(),
        plural(total, "word", "words"),
        result.reports.len(),
        plural(result.reports.len(), "input", "inputs"),
        format_millis(result.duration).cyan()
    );
    if verbose {
        println!(
            "Arrangements checked: {}",
            format_count(result.total_arrangements())
        );
    }
}

/// Print the outcome of ensuring the index is populated
pub fn print_populate_report(report: &PopulateReport) {
    match report {
        PopulateReport::AlreadyPopulated => {
            println!("{}", "Dictionary already populated".bright_black());
        }
        PopulateReport::Populated {
            committed,
            skipped,
            duration,
        } => {
            println!(
                "{} {} {} in {:.2}s",
                "Dictionary populated:".green().bold(),
                format_count(*committed as u64),
                plural(*committed, "word", "words"),
                duration.as_secs_f64()
            );
            if *skipped > 0 {
                println!(
                    "  {} {} skipped",
                    format_count(*skipped as u64).yellow(),
                    plural(*skipped, "entry", "entries")
                );
            }
        }
    }
}

/// Print membership of each looked-up word
pub fn print_lookup_results(results: &[LookupResult]) {
    for result in results {
        if result.found {
            println!("{} {}", "✓".green().bold(), result.word);
        } else {
            println!("{} {}", "✗".red().bold(), result.word.bright_black());
        }
    }
}

/// Print the index location and word counts
pub fn print_index_summary(summary: &IndexSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD INDEX".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Location:   {}", summary.path.display());
    println!(
        "   Words:      {}",
        format_count(summary.committed).bright_yellow().bold()
    );
    if summary.pending > 0 {
        println!(
            "   Pending:    {}",
            format_count(summary.pending as u64).yellow()
        );
    }
    if summary.committed == 0 && summary.pending == 0 {
        println!("   {}", "Not populated yet".bright_black());
    }
}
