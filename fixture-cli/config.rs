//! Configuration types and constants for the fixture generators.

use std::path::PathBuf;

use fixture_core::config::{DEFAULT_CHAIN_LENGTH, DEFAULT_INCLUDE_PREFIX};

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Configuration for a `gen-blob` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobConfig {
    /// Blob size in megabytes
    pub size: u64,
    /// Destination file
    pub output: PathBuf,
    /// Re-read the written file and check it against the summary
    pub verify: bool,
}

/// Configuration for a `schema-chain` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Number of files in the chain
    pub count: u32,
    /// Directory receiving the files
    pub directory: PathBuf,
    /// Prefix written in front of every `schemaLocation`
    pub include_prefix: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CHAIN_LENGTH,
            directory: PathBuf::from("."),
            include_prefix: DEFAULT_INCLUDE_PREFIX.to_string(),
        }
    }
}
