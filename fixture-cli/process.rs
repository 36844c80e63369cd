//! High-level CLI orchestration.

use std::io;

use crate::config::{BlobConfig, ChainConfig};
use crate::operations::{generate_blob, generate_chain, print_blob_summary};

/// Runs `gen-blob` with program-name error context.
///
/// Writes the blob, then prints `Wrote <N> bytes` and `Blob md5 hash: <hex>` on stdout.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`crate::InvocationError`] if generation or
/// verification fails, or a plain [`io::Error`] if stdout cannot be written.
pub fn run_blob_cli(config: &BlobConfig, program: &str) -> io::Result<()> {
    let summary = generate_blob(config).map_err(|err| err.into_invocation(program))?;

    print_blob_summary(io::stdout().lock(), &summary)
}

/// Runs `schema-chain` with program-name error context.
///
/// Nothing is printed on success.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`crate::InvocationError`] for the first
/// failure. Remaining files are not written.
pub fn run_chain_cli(config: &ChainConfig, program: &str) -> io::Result<()> {
    let summary = generate_chain(config).map_err(|err| err.into_invocation(program))?;
    log::info!(
        "{program}: wrote {} files ({} bytes)",
        summary.len(),
        summary.bytes_written
    );

    Ok(())
}
