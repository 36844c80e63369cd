//! Synchronous blob pipeline.

use std::io::Write;

use md5::{Digest, Md5};

use crate::chunk::Chunk;
use crate::config::{BlobSummary, CHUNK_SIZE};
use crate::error::Result;
use crate::header::encode_length;
use crate::options::BlobOptions;

/// Writes a blob into `writer` using the provided options.
///
/// The header carries [`BlobOptions::declared_length`]. Whole chunks follow until at
/// least that many payload bytes have been written, so the payload may run past the
/// declared length by up to one chunk minus one byte. Every chunk is fed to the MD5
/// digest; the header is not.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`Write`] trait
/// * `options` - Blob configuration [`BlobOptions`]
///
/// # Returns
///
/// Returns a [`BlobSummary`] with the declared length, payload byte count and digest.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing the header, any chunk, or the final flush fails.
pub fn write_blob<W>(mut writer: W, options: &BlobOptions) -> Result<BlobSummary>
where
    W: Write,
{
    let declared_length = options.declared_length();
    let chunk = Chunk::new();
    let mut hasher = Md5::new();
    let mut bytes_written = 0u64;
    let mut chunks = 0u64;

    writer.write_all(&encode_length(declared_length))?;
    log::debug!(
        "blob header written, declared length {declared_length} bytes ({} chunks)",
        options.chunk_count()
    );

    while bytes_written < declared_length {
        writer.write_all(&chunk)?;
        hasher.update(&*chunk);
        bytes_written += CHUNK_SIZE as u64;
        chunks += 1;
        log::trace!("chunk {chunks} written, {bytes_written} payload bytes");
    }

    writer.flush()?;

    let summary = BlobSummary::new(declared_length, chunks, hasher.finalize().into());
    if summary.overshoot() > 0 {
        log::debug!(
            "payload overshoots declared length by {} bytes",
            summary.overshoot()
        );
    }

    Ok(summary)
}
