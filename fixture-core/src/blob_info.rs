//! Reading back and checking existing blobs.

use std::io::{self, Read};

use md5::{Digest, Md5};

use crate::config::{CHUNK_PATTERN, CHUNK_SIZE};
use crate::error::{Error, Result};
use crate::header::read_length;

/// Information gathered from an existing blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobInfo {
    /// Payload length stored in the header.
    pub declared_length: u64,
    /// Number of payload bytes present after the header.
    pub payload_length: u64,
    /// MD5 digest of the payload.
    pub digest: [u8; 16],
    /// Whether the payload consists solely of repetitions of the chunk pattern.
    pub pattern_intact: bool,
}

impl BlobInfo {
    /// Returns the payload digest as lowercase hexadecimal.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Returns `true` if the payload covers the declared length in whole chunks,
    /// which is what the blob pipeline always produces.
    pub fn is_well_formed(&self) -> bool {
        self.pattern_intact
            && self.payload_length >= self.declared_length
            && self.payload_length % CHUNK_SIZE as u64 == 0
            && self.payload_length - self.declared_length < CHUNK_SIZE as u64
    }
}

/// Reads a blob from `input`, hashing the payload and checking its pattern.
///
/// # Errors
///
/// Returns [`Error::CorruptBlob`] if the input is shorter than the header, or
/// [`Error::Io`] if reading fails.
pub fn inspect_blob(mut input: impl Read) -> Result<BlobInfo> {
    let declared_length = read_length(&mut input).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::CorruptBlob {
                reason: "input is shorter than the 8-byte length header".to_string(),
            }
        } else {
            Error::Io(err)
        }
    })?;

    let mut hasher = Md5::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut payload_length = 0u64;
    let mut pattern_intact = true;

    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        let data = &buffer[..read];
        hasher.update(data);

        if pattern_intact {
            // Reads may split the pattern, so realign on the running offset.
            let offset = (payload_length % CHUNK_PATTERN.len() as u64) as usize;
            pattern_intact = data
                .iter()
                .enumerate()
                .all(|(i, byte)| *byte == CHUNK_PATTERN[(offset + i) % CHUNK_PATTERN.len()]);
        }
        payload_length += read as u64;
    }

    log::debug!(
        "inspected blob: declared {declared_length} bytes, found {payload_length} payload bytes"
    );

    Ok(BlobInfo {
        declared_length,
        payload_length,
        digest: hasher.finalize().into(),
        pattern_intact,
    })
}
