//! # fixture-core
//!
//! Generation of test fixtures for DFDL test suites.
//!
//! This crate provides the two generators used by the fixture tooling:
//!
//! - **Blobs**: a binary file made of an 8-byte big-endian length header followed by
//!   a payload of repeated `DE AD BE EF` chunks, hashed with MD5 while it is written.
//!   Both synchronous and asynchronous pipelines are available.
//! - **Schema chains**: a series of small DFDL schema files where each one includes
//!   the next, used to exercise deep `xs:include` chains.

pub mod blob_info;
pub mod chunk;
pub mod config;
pub mod error;
pub mod header;
pub mod options;
pub mod pipeline;
pub mod schema;

pub use blob_info::{inspect_blob, BlobInfo};
pub use chunk::Chunk;
pub use config::{BlobSummary, ChainSummary};
pub use error::{Error, Result};
pub use options::BlobOptions;
#[cfg(feature = "async")]
pub use pipeline::write_blob_async;
pub use pipeline::write_blob;
pub use schema::{write_chain, ChainOptions};
