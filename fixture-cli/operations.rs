//! Fixture generation operations behind the CLI binaries.

use std::io::{self, Write};

use fixture_core::schema::ChainOptions;
use fixture_core::{inspect_blob, write_blob, BlobInfo, BlobOptions, BlobSummary, ChainSummary};

use crate::config::{BlobConfig, ChainConfig};
use crate::error::{Error, Result};
use crate::io::{ensure_directory, open_input, open_output};

/// Characters that cannot appear verbatim inside an XML attribute value.
const FORBIDDEN_PREFIX_CHARS: [char; 3] = ['"', '<', '&'];

/// Writes the blob described by `config` to its output path.
///
/// The header is written first, then whole chunks until the declared length is
/// covered. The file is flushed and closed before this function returns.
///
/// # Errors
///
/// Returns an error if the size is invalid, the output file cannot be created, or
/// writing fails. With `config.verify` set, also fails when the file does not read
/// back as written.
pub fn generate_blob(config: &BlobConfig) -> Result<BlobSummary> {
    let options = BlobOptions::from_megabytes(config.size).map_err(|source| Error::Generation {
        path: config.output.clone(),
        source,
    })?;

    log::info!(
        "writing {} MB blob to {} ({} chunks)",
        config.size,
        config.output.display(),
        options.chunk_count()
    );

    let mut writer = open_output(&config.output)?;
    let summary = write_blob(&mut writer, &options).map_err(|source| Error::Generation {
        path: config.output.clone(),
        source,
    })?;
    drop(writer);

    if config.verify {
        let info = verify_blob(config, &summary)?;
        log::info!(
            "verified {}: {} payload bytes, md5 {}",
            config.output.display(),
            info.payload_length,
            info.digest_hex()
        );
    }

    Ok(summary)
}

/// Re-reads the blob at `config.output` and compares it with `summary`.
///
/// # Errors
///
/// Returns [`Error::VerificationFailed`] describing the first mismatch, or an I/O
/// error if the file cannot be read.
pub fn verify_blob(config: &BlobConfig, summary: &BlobSummary) -> Result<BlobInfo> {
    let reader = open_input(&config.output)?;
    let info = inspect_blob(reader).map_err(|source| Error::Generation {
        path: config.output.clone(),
        source,
    })?;

    let fail = |reason: String| Error::VerificationFailed {
        path: config.output.clone(),
        reason,
    };

    if info.declared_length != summary.declared_length {
        return Err(fail(format!(
            "header declares {} bytes, expected {}",
            info.declared_length, summary.declared_length
        )));
    }
    if info.payload_length != summary.bytes_written {
        return Err(fail(format!(
            "found {} payload bytes, expected {}",
            info.payload_length, summary.bytes_written
        )));
    }
    if !info.pattern_intact {
        return Err(fail("payload does not repeat the chunk pattern".to_string()));
    }
    if info.digest != summary.digest {
        return Err(fail(format!(
            "md5 {} does not match {}",
            info.digest_hex(),
            summary.digest_hex()
        )));
    }

    Ok(info)
}

/// Prints the two-line blob report.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_blob_summary(mut out: impl Write, summary: &BlobSummary) -> io::Result<()> {
    writeln!(out, "Wrote {} bytes", summary.bytes_written)?;
    writeln!(out, "Blob md5 hash: {}", summary.digest_hex())?;
    out.flush()
}

/// Writes the schema chain described by `config`.
///
/// # Errors
///
/// Returns an error if the include prefix is unusable, the target directory cannot
/// be created, or any file fails to write. Files after the failing one are not written.
pub fn generate_chain(config: &ChainConfig) -> Result<ChainSummary> {
    if let Some(c) = config
        .include_prefix
        .chars()
        .find(|c| FORBIDDEN_PREFIX_CHARS.contains(c))
    {
        return Err(Error::InvalidArgument(format!(
            "Include prefix must not contain '{c}'"
        )));
    }

    ensure_directory(&config.directory)?;

    let options = ChainOptions::default()
        .with_length(config.count)
        .with_include_prefix(config.include_prefix.as_str());

    log::info!(
        "writing schema chain of {} files to {}",
        config.count,
        config.directory.display()
    );

    fixture_core::write_chain(&config.directory, &options).map_err(|source| Error::Generation {
        path: config.directory.clone(),
        source,
    })
}
