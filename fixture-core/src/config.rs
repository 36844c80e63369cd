//! Shared constants and summary types for fixture generation.

use std::path::PathBuf;

/// Number of bytes in one "megabyte" of blob payload.
///
/// Blob sizes use 1000 KiB megabytes, so one megabyte holds exactly 256 chunks.
pub const BYTES_PER_MEGABYTE: u64 = 1_024_000;

/// Four-byte pattern repeated throughout the blob payload.
pub const CHUNK_PATTERN: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// Number of pattern repetitions in one chunk.
pub const CHUNK_REPEAT: usize = 1000;

/// Size in bytes of the chunk written by the blob pipeline.
pub const CHUNK_SIZE: usize = CHUNK_PATTERN.len() * CHUNK_REPEAT;

/// Size in bytes of the big-endian length header at the start of a blob.
pub const HEADER_SIZE: usize = 8;

/// Number of files in a schema chain unless configured otherwise.
pub const DEFAULT_CHAIN_LENGTH: u32 = 100;

/// Relative directory that `xs:include` locations are resolved against.
pub const DEFAULT_INCLUDE_PREFIX: &str = "edu/illinois/ncsa/daffodil/schema_chain/";

/// Statistical summary of a completed blob write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobSummary {
    /// Payload length stored in the header.
    pub declared_length: u64,

    /// Payload bytes written after the header.
    ///
    /// Always a multiple of [`CHUNK_SIZE`] and never smaller than `declared_length`.
    pub bytes_written: u64,

    /// Number of whole chunks written.
    pub chunks: u64,

    /// MD5 digest of the payload (the header is not hashed).
    pub digest: [u8; 16],
}

impl BlobSummary {
    pub(crate) const fn new(declared_length: u64, chunks: u64, digest: [u8; 16]) -> Self {
        Self {
            declared_length,
            bytes_written: chunks * CHUNK_SIZE as u64,
            chunks,
            digest,
        }
    }

    /// Returns the payload digest as lowercase hexadecimal.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Number of payload bytes written past the declared length.
    ///
    /// Non-zero only when the declared length is not a multiple of [`CHUNK_SIZE`],
    /// since the final chunk is always written whole.
    pub fn overshoot(&self) -> u64 {
        self.bytes_written - self.declared_length
    }

    /// Total file size including the header.
    pub fn file_size(&self) -> u64 {
        self.bytes_written + HEADER_SIZE as u64
    }
}

/// Summary of a written schema chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSummary {
    /// Paths of the written files in chain order.
    pub files: Vec<PathBuf>,

    /// Total bytes written across all files.
    pub bytes_written: u64,
}

impl ChainSummary {
    /// Number of files in the chain.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no file was written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
