//! Pipeline module for writing blobs.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::write_blob_async;
pub use sync::write_blob;
