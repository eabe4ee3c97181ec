//! CLI interface for liboverlap
//!
//! Provides the command-line driver: input parsing, configuration loading
//! and the `solve`, `check` and `stats` commands.

pub mod args;
pub mod commands;
pub mod input;
pub mod paths;

pub use args::{Cli, Commands};
pub use input::{parse_input, read_input};
pub use paths::{config_dir, load_config};
