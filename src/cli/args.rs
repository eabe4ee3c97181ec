//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::automaton::SeparatorPolicy;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "liboverlap")]
#[command(about = "Expected overlap cost of a random string chain")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path (JSON)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the expected chain cost and print it
    Solve {
        #[command(flatten)]
        input: InputArgs,

        /// Print computation statistics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare the automaton result with a brute-force computation
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show automaton statistics for the input
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Options shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Input file (`n` followed by `n` strings); reads stdin if omitted
    pub input: Option<PathBuf>,

    /// Prime modulus for the result
    #[arg(short, long)]
    pub modulus: Option<u64>,

    /// Separator policy between strings (unique, omit)
    #[arg(short, long)]
    pub separators: Option<SeparatorPolicy>,

    /// Maximum sum of string lengths
    #[arg(long)]
    pub max_total_length: Option<usize>,

    /// Validate automaton invariants before counting
    #[arg(long)]
    pub validate: bool,
}
