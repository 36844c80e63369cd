//! Error types for fixture CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A structured CLI error that preserves the underlying failure.
///
/// Carried inside the [`io::Error`] returned by the runners so that the binaries can
/// honour `-qq` while keeping the program name in the message.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "gen-blob").
    pub program: String,
    /// Underlying error produced by the run.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error message for stderr, respecting `-q/-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"gen-blob"`).
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    if let Some(run_err) = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        return Some(run_err.to_string());
    }

    Some(format!("{program}: {err}"))
}

/// Main error type for fixture CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create the output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create the output directory
    #[error("{}: Cannot create directory: {source}", path.display())]
    CreateDirectory {
        /// Path to the directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to open a file for reading
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Generation failed while writing a fixture
    #[error("{}: {source}", path.display())]
    Generation {
        /// Path of the fixture being generated
        path: PathBuf,
        /// Error reported by the generator
        #[source]
        source: fixture_core::Error,
    },

    /// Invalid argument value
    #[error("{0}")]
    InvalidArgument(String),

    /// The written blob does not read back as expected
    #[error("{}: Verification failed: {reason}", path.display())]
    VerificationFailed {
        /// Path to the blob
        path: PathBuf,
        /// What did not match
        reason: String,
    },
}

/// Specialized `Result` type for fixture CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn kind(&self) -> io::ErrorKind {
        match self {
            Error::CreateOutput { source, .. }
            | Error::CreateDirectory { source, .. }
            | Error::OpenInput { source, .. } => source.kind(),
            Error::Generation { source, .. } => match source {
                fixture_core::Error::Io(err)
                | fixture_core::Error::WriteFile { source: err, .. } => err.kind(),
                fixture_core::Error::InvalidSize { .. }
                | fixture_core::Error::SizeOverflow { .. }
                | fixture_core::Error::LengthOverflow { .. }
                | fixture_core::Error::InvalidChainLength { .. } => io::ErrorKind::InvalidInput,
                fixture_core::Error::CorruptBlob { .. } => io::ErrorKind::InvalidData,
            },
            Error::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            Error::VerificationFailed { .. } => io::ErrorKind::InvalidData,
        }
    }

    /// Wraps the error with the program name for stderr reporting.
    pub fn into_invocation(self, program: &str) -> io::Error {
        let kind = self.kind();
        io::Error::new(
            kind,
            InvocationError {
                program: program.to_string(),
                source: self,
            },
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        // Preserve the original error kind
        io::Error::new(err.kind(), err)
    }
}
