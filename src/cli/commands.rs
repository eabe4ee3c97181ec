//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::OverlapConfig;
use crate::overlap::naive::expected_overlap_naive;
use crate::overlap::ExpectedOverlap;

use super::args::{Cli, Commands, InputArgs};
use super::input::read_input;
use super::paths::load_config;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let base = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Solve { input, verbose } => cmd_solve(&input, base, verbose),
        Commands::Check { input } => cmd_check(&input, base),
        Commands::Stats { input } => cmd_stats(&input, base),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn resolve_config(args: &InputArgs, base: OverlapConfig) -> Result<OverlapConfig> {
    let mut builder = OverlapConfig::builder()
        .modulus(args.modulus.unwrap_or(base.modulus))
        .max_total_length(args.max_total_length.unwrap_or(base.max_total_length))
        .max_strings(base.max_strings)
        .separators(args.separators.unwrap_or(base.separators));
    if args.validate || base.validate_automaton {
        builder = builder.validate_automaton(true);
    }
    builder.build().context("Invalid configuration")
}

fn calculator(args: &InputArgs, base: OverlapConfig) -> Result<(ExpectedOverlap, Vec<Vec<u8>>)> {
    let config = resolve_config(args, base)?;
    let calc = ExpectedOverlap::new(config)?;
    let strings = read_input(args.input.as_deref())?;
    Ok((calc, strings))
}

fn input_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

/// Solve command
fn cmd_solve(args: &InputArgs, base: OverlapConfig, verbose: bool) -> Result<()> {
    let (calc, strings) = calculator(args, base)?;
    let report = calc
        .compute(&strings)
        .with_context(|| format!("Cannot solve {}", input_name(args.input.as_deref())))?;

    println!("{}", report.expected);

    if verbose {
        let config = calc.config();
        eprintln!("{}", "Overlap Report".bold().underline());
        eprintln!("  {}: {}", "Strings".cyan(), report.string_count);
        eprintln!("  {}: {}", "Total length".cyan(), report.total_length);
        eprintln!("  {}: {}", "States".cyan(), report.state_count);
        eprintln!("  {}: {}", "Separators".cyan(), config.separators);
        eprintln!("  {}: {}", "Modulus".cyan(), config.modulus);
        eprintln!("  {}: {}", "Pair sum".cyan(), report.pair_sum);
        eprintln!("  {}: {}", "Diagonal".cyan(), report.diagonal_sum);
        eprintln!("  {}: {}", "Distinct pairs".cyan(), report.distinct_sum);
        eprintln!("  {}: {}", "Expected".green(), report.expected);
    }

    Ok(())
}

/// Check command
fn cmd_check(args: &InputArgs, base: OverlapConfig) -> Result<()> {
    let (calc, strings) = calculator(args, base)?;
    let report = calc.compute(&strings)?;

    let naive = expected_overlap_naive(&strings, calc.modulus())?;

    if report.expected != naive {
        bail!(
            "Mismatch: automaton gives {}, brute force gives {}",
            report.expected,
            naive
        );
    }

    println!("  {}: {}", "Automaton".cyan(), report.expected);
    println!("  {}: {}", "Brute force".cyan(), naive);
    println!(
        "{} ({} strings, {} states)",
        "OK".green().bold(),
        report.string_count,
        report.state_count
    );
    Ok(())
}

/// Stats command
fn cmd_stats(args: &InputArgs, base: OverlapConfig) -> Result<()> {
    let (calc, strings) = calculator(args, base)?;
    let gsa = calc.build(&strings)?;
    gsa.validate().context("Automaton failed validation")?;
    let stats = gsa.stats();

    println!("{}", "Automaton Information".bold().underline());
    println!("  {}: {}", "Input".cyan(), input_name(args.input.as_deref()));
    println!("  {}: {}", "Separators".cyan(), calc.config().separators);
    println!("  {}: {}", "Strings".cyan(), stats.strings);
    println!("  {}: {}", "Symbols fed".cyan(), stats.symbols);
    println!("  {}: {}", "States".cyan(), stats.states);
    println!("  {}: {}", "Clones".cyan(), stats.clones);
    println!("  {}: {}", "Transitions".cyan(), stats.edges);

    println!(
        "  {}: {} / {}",
        "State bound".cyan(),
        stats.states,
        stats.state_bound().to_string().yellow()
    );
    Ok(())
}
