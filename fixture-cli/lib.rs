//! Common CLI functionality for the fixture generators.
//!
//! This crate holds everything the `gen-blob` and `schema-chain` binaries share:
//! configuration types, output file handling, error presentation and logger setup.
//! The generators themselves live in `fixture-core`.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod operations;
pub mod process;
pub mod utils;


pub use config::{BlobConfig, ChainConfig, DEFAULT_BUFFER_SIZE};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use operations::{generate_blob, generate_chain, print_blob_summary, verify_blob};
pub use process::{run_blob_cli, run_chain_cli};
pub use utils::args::{parse_chain_length, parse_megabytes};
