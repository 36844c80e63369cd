//! Configuration for blob generation.

use crate::config::{BYTES_PER_MEGABYTE, CHUNK_SIZE};
use crate::error::{Error, Result};

/// Configuration for a blob write.
///
/// The only free parameter is the declared payload length. The pipeline writes
/// whole chunks until at least that many payload bytes are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobOptions {
    declared_length: u64,
}

impl BlobOptions {
    /// Creates options for a blob of `megabytes` megabytes of
    /// [`BYTES_PER_MEGABYTE`] bytes each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for zero and [`Error::SizeOverflow`] when the
    /// resulting length does not fit into a `u64`.
    pub fn from_megabytes(megabytes: u64) -> Result<Self> {
        if megabytes == 0 {
            return Err(Error::InvalidSize { megabytes });
        }

        let declared_length = megabytes
            .checked_mul(BYTES_PER_MEGABYTE)
            .ok_or(Error::SizeOverflow { megabytes })?;

        Ok(Self { declared_length })
    }

    /// Creates options declaring an arbitrary payload length in bytes.
    ///
    /// Lengths that are not a multiple of [`CHUNK_SIZE`] are rounded up to the next
    /// whole chunk when written; the header still carries `declared_length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthOverflow`] when the length rounded up to whole chunks
    /// does not fit into a `u64`.
    pub fn from_length(declared_length: u64) -> Result<Self> {
        declared_length
            .div_ceil(CHUNK_SIZE as u64)
            .checked_mul(CHUNK_SIZE as u64)
            .ok_or(Error::LengthOverflow {
                length: declared_length,
            })?;

        Ok(Self { declared_length })
    }

    /// Payload length stored in the header.
    pub const fn declared_length(&self) -> u64 {
        self.declared_length
    }

    /// Number of whole chunks the pipeline will write.
    pub const fn chunk_count(&self) -> u64 {
        self.declared_length.div_ceil(CHUNK_SIZE as u64)
    }

    /// Payload bytes the pipeline will write.
    pub const fn payload_length(&self) -> u64 {
        self.chunk_count() * CHUNK_SIZE as u64
    }
}
