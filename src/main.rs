//! Anagram Solver - CLI
//!
//! Solves anagrams against a persistent word index, populating the index from
//! a word list on first use.

use anagram_solver::{
    commands::{SolveConfig, ensure_populated, lookup_words, solve_all},
    config::{DEFAULT_DB_DIR, DEFAULT_MAP_SIZE_MB, DEFAULT_WORDS_FILE, IndexConfig},
    index::WordIndex,
    output::{
        print_index_summary, print_lookup_results, print_populate_report, print_solve_result,
    },
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Find every dictionary word hidden in the letters of a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the word index
    #[arg(long = "db", global = true, env = "ANAGRAM_DB", default_value = DEFAULT_DB_DIR)]
    db_path: PathBuf,

    /// Word list used to populate an empty index, one word per line
    #[arg(long = "words", global = true, env = "ANAGRAM_WORDS", default_value = DEFAULT_WORDS_FILE)]
    words_path: PathBuf,

    /// Maximum index size in MiB
    #[arg(long, global = true, default_value_t = DEFAULT_MAP_SIZE_MB)]
    map_size_mb: usize,

    /// Debug logging and arrangement counts
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve anagrams (default - uses built-in samples when no words are given)
    Solve {
        /// Lowercase words to solve
        words: Vec<String>,

        /// Solve inputs in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Populate the index if it is empty
    Populate,

    /// Check whether words are in the index
    Lookup {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show index location and size without populating it
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = IndexConfig::new(&cli.db_path, &cli.words_path).with_map_size_mb(cli.map_size_mb);
    let mut index = WordIndex::open(&config)
        .with_context(|| format!("failed to open word index at {}", config.db_path.display()))?;

    let command = cli.command.unwrap_or(Commands::Solve {
        words: Vec::new(),
        parallel: false,
    });

    let result = run_command(command, &mut index, &config, cli.verbose);
    index.close();
    result
}

fn run_command(
    command: Commands,
    index: &mut WordIndex,
    config: &IndexConfig,
    verbose: bool,
) -> Result<()> {
    if matches!(command, Commands::Info) {
        print_index_summary(&index.summary()?);
        return Ok(());
    }

    let report = ensure_populated(index, &config.words_path, true).with_context(|| {
        format!(
            "failed to populate word index from {}",
            config.words_path.display()
        )
    })?;
    print_populate_report(&report);

    match command {
        Commands::Solve { words, parallel } => run_solve_command(words, parallel, index, verbose),
        Commands::Lookup { words } => {
            print_lookup_results(&lookup_words(&words, &*index)?);
            Ok(())
        }
        Commands::Populate | Commands::Info => Ok(()),
    }
}

fn run_solve_command(
    words: Vec<String>,
    parallel: bool,
    index: &WordIndex,
    verbose: bool,
) -> Result<()> {
    let mut config = if words.is_empty() {
        SolveConfig::samples()
    } else {
        SolveConfig::new(words)
    };
    config.parallel = parallel;

    let result = solve_all(&config, index)?;
    print_solve_result(&result, verbose);
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("anagram_solver=debug")
        } else {
            EnvFilter::new("anagram_solver=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
