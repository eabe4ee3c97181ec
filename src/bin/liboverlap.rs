//! liboverlap CLI
//!
//! Reads `n` followed by `n` strings and prints the expected overlap cost of a
//! random chain modulo a prime.

use clap::Parser;
use colored::Colorize;
use std::process;

use liboverlap::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
