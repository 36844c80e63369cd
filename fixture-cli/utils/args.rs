//! Value parsers for command-line arguments.
//!
//! These are plugged into clap through `value_parser = ...` so that bad values are
//! reported as usage errors.

/// Parses a blob size in megabytes.
///
/// # Errors
///
/// Returns an error if the value is empty, not a non-negative integer, or zero.
pub fn parse_megabytes(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty size".to_string());
    }

    let size: u64 = s.parse().map_err(|_| format!("Invalid size: {s}"))?;
    if size == 0 {
        return Err("Size must be at least 1 MB".to_string());
    }

    Ok(size)
}

/// Parses the number of files in a schema chain.
///
/// # Errors
///
/// Returns an error if the value is empty, not an integer that fits `u32`, or zero.
pub fn parse_chain_length(s: &str) -> Result<u32, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty count".to_string());
    }

    let count: u32 = s.parse().map_err(|_| format!("Invalid count: {s}"))?;
    if count == 0 {
        return Err("Count must be at least 1".to_string());
    }

    Ok(count)
}
