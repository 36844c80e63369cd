//! Error types and result handling for fixture generation.

use std::fmt;
use std::path::PathBuf;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering all failure modes of the generators.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing or reading a fixture.
    Io(std::io::Error),

    /// Writing a fixture file failed.
    WriteFile {
        /// Path of the file being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A blob size of zero megabytes was requested.
    InvalidSize {
        /// Requested size in megabytes
        megabytes: u64,
    },

    /// The requested blob size does not fit into the 64-bit length header.
    SizeOverflow {
        /// Requested size in megabytes
        megabytes: u64,
    },

    /// The declared length rounded up to whole chunks does not fit into a `u64`.
    LengthOverflow {
        /// Requested payload length in bytes
        length: u64,
    },

    /// A schema chain must contain at least one file.
    InvalidChainLength {
        /// Requested number of files
        length: u32,
    },

    /// The data does not follow the blob layout.
    CorruptBlob {
        /// Description of what is wrong with the data
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::WriteFile { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            Error::InvalidSize { megabytes } => {
                write!(f, "blob size must be at least 1 MB, got {megabytes}")
            }
            Error::SizeOverflow { megabytes } => write!(
                f,
                "blob size of {megabytes} MB does not fit into a 64-bit length header",
            ),
            Error::LengthOverflow { length } => write!(
                f,
                "blob length of {length} bytes cannot be padded to whole chunks",
            ),
            Error::InvalidChainLength { length } => {
                write!(f, "schema chain needs at least one file, got {length}")
            }
            Error::CorruptBlob { reason } => write!(f, "corrupt blob: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) | Error::WriteFile { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
