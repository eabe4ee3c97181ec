//! Batch input parsing

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Parse `n` followed by exactly `n` whitespace-separated strings.
///
/// Strings are returned as raw bytes. Validation of the count and the
/// strings themselves is left to the library.
pub fn parse_input(data: &[u8]) -> Result<Vec<Vec<u8>>> {
    let mut tokens = data
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    let header = tokens.next().context("Input is empty: expected a string count")?;
    let header = std::str::from_utf8(header).context("String count is not valid UTF-8")?;
    let n: usize = header
        .parse()
        .with_context(|| format!("Invalid string count: {}", header))?;

    let strings: Vec<Vec<u8>> = tokens.by_ref().take(n).map(<[u8]>::to_vec).collect();
    if strings.len() < n {
        bail!("Expected {} strings, found {}", n, strings.len());
    }
    if tokens.next().is_some() {
        bail!("Unexpected data after {} strings", n);
    }

    Ok(strings)
}

/// Read and parse input from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<Vec<u8>>> {
    let mut data = Vec::new();
    match path {
        Some(path) => {
            data = std::fs::read(path)
                .with_context(|| format!("Failed to read input: {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
        }
    }
    parse_input(&data)
}
