//! Asynchronous blob pipeline.

use md5::{Digest, Md5};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::chunk::Chunk;
use crate::config::{BlobSummary, CHUNK_SIZE};
use crate::error::Result;
use crate::header::encode_length;
use crate::options::BlobOptions;

/// Writes a blob asynchronously into `writer` using the provided options.
///
/// Produces exactly the same bytes and summary as [`crate::pipeline::write_blob`].
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`] traits
/// * `options` - Blob configuration [`BlobOptions`]
///
/// # Returns
///
/// Returns a [`BlobSummary`] with the declared length, payload byte count and digest.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing the header, any chunk, or the final flush fails.
pub async fn write_blob_async<W>(mut writer: W, options: &BlobOptions) -> Result<BlobSummary>
where
    W: AsyncWrite + Unpin,
{
    let declared_length = options.declared_length();
    let chunk = Chunk::new();
    let mut hasher = Md5::new();
    let mut bytes_written = 0u64;
    let mut chunks = 0u64;

    writer.write_all(&encode_length(declared_length)).await?;

    while bytes_written < declared_length {
        writer.write_all(&chunk).await?;
        hasher.update(&*chunk);
        bytes_written += CHUNK_SIZE as u64;
        chunks += 1;
    }

    writer.flush().await?;
    log::debug!("async blob finished after {chunks} chunks");

    Ok(BlobSummary::new(
        declared_length,
        chunks,
        hasher.finalize().into(),
    ))
}
