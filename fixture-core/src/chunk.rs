//! The repeating unit of blob payloads.

use std::ops::Deref;

use crate::config::{CHUNK_PATTERN, CHUNK_REPEAT, CHUNK_SIZE};

/// A [`CHUNK_SIZE`]-byte block holding [`CHUNK_PATTERN`] repeated [`CHUNK_REPEAT`] times.
///
/// The blob pipeline writes this block as a whole and never truncates it.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    bytes: Box<[u8]>,
}

impl Chunk {
    /// Builds the chunk.
    pub fn new() -> Self {
        let bytes = CHUNK_PATTERN.repeat(CHUNK_REPEAT).into_boxed_slice();
        debug_assert_eq!(bytes.len(), CHUNK_SIZE);
        Self { bytes }
    }

    /// Returns the chunk contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Checks that `data` consists solely of whole or partial repetitions of the pattern,
    /// starting at a pattern boundary.
    pub fn matches_pattern(data: &[u8]) -> bool {
        data.chunks(CHUNK_PATTERN.len())
            .all(|word| word == &CHUNK_PATTERN[..word.len()])
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Chunk {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk").field("len", &self.bytes.len()).finish()
    }
}
