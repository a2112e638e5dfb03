//! Offline Guessing - CLI
//!
//! Check, search and inspect Questioner strategies for the offline pair-guessing game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use offline_guessing::{
    commands::{CheckConfig, SearchConfig, check_strategy, run_search, strategy_matrix},
    core::Question,
    output::{print_check_result, print_matrix, print_search_result},
    search::{ChainLength, SearchMode},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "offline_guessing",
    about = "Strategy search for the offline pair-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a strategy is winning and list every collision
    Check {
        /// Universe size (numbers are 1..=n)
        #[arg(short)]
        n: u32,

        /// Check the complementary strategy instead
        #[arg(short, long)]
        complement: bool,

        /// Questions, e.g. "1,2" "1,3" (use "" for the empty question)
        #[arg(required = true)]
        questions: Vec<Question>,
    },

    /// Enumerate candidate strategies
    Search {
        /// Universe size (numbers are 1..=n)
        #[arg(short)]
        n: u32,

        /// Question length
        #[arg(short)]
        l: u32,

        /// Questions per strategy
        #[arg(short)]
        k: usize,

        /// Use cyclic-shift chains instead of exhaustive search
        #[arg(long)]
        circulant: bool,

        /// Circulant chain length: 'strategy-size' (k, default) or 'question-length' (l)
        #[arg(long, default_value = "strategy-size", value_parser = parse_chain_length)]
        chain_length: ChainLength,

        /// Only list strategies that are winning for the Questioner
        #[arg(short, long)]
        winning_only: bool,

        /// Stop after this many strategies
        #[arg(long)]
        limit: Option<usize>,

        /// Show a progress spinner
        #[arg(long)]
        progress: bool,
    },

    /// Print the 0/1 strategy matrix
    Matrix {
        /// Universe size (numbers are 1..=n)
        #[arg(short)]
        n: u32,

        /// Questions, e.g. "1,2" "1,3"
        #[arg(required = true)]
        questions: Vec<Question>,
    },
}

fn parse_chain_length(name: &str) -> Result<ChainLength, String> {
    ChainLength::from_name(name).ok_or_else(|| {
        format!("unknown chain length '{name}' (expected 'strategy-size' or 'question-length')")
    })
}

/// Install the tracing subscriber; `RUST_LOG` wins over the -v count
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            n,
            complement,
            questions,
        } => run_check_command(n, complement, questions),
        Commands::Search {
            n,
            l,
            k,
            circulant,
            chain_length,
            winning_only,
            limit,
            progress,
        } => {
            let mode = if circulant {
                SearchMode::Circulant(chain_length)
            } else {
                SearchMode::Exhaustive
            };
            let config = SearchConfig {
                n,
                l,
                k,
                mode,
                winning_only,
                limit,
                progress,
            };
            run_search_command(&config)
        }
        Commands::Matrix { n, questions } => run_matrix_command(n, questions),
    }
}

fn run_check_command(n: u32, complement: bool, questions: Vec<Question>) -> Result<()> {
    let mut config = CheckConfig::new(n, questions);
    config.complement = complement;

    let result = check_strategy(config)?;
    print_check_result(&result);
    Ok(())
}

fn run_search_command(config: &SearchConfig) -> Result<()> {
    debug!(mode = %config.mode, "running search command");
    let result = run_search(config)?;
    print_search_result(&result);
    Ok(())
}

fn run_matrix_command(n: u32, questions: Vec<Question>) -> Result<()> {
    let matrix = strategy_matrix(n, questions)?;
    print_matrix(&matrix);
    Ok(())
}
