//! Helpers for writing and reading the blob length header.

use std::io;

use crate::config::HEADER_SIZE;

/// Encodes a payload length as the 8-byte big-endian blob header.
pub const fn encode_length(length: u64) -> [u8; HEADER_SIZE] {
    length.to_be_bytes()
}

/// Reads the blob header from `input` and returns the declared payload length.
///
/// # Errors
///
/// Returns an error with kind [`io::ErrorKind::UnexpectedEof`] if fewer than
/// eight bytes are available, or any error produced by `input`.
pub fn read_length(input: &mut impl io::Read) -> io::Result<u64> {
    let mut header = [0_u8; HEADER_SIZE];
    input.read_exact(&mut header)?;
    Ok(u64::from_be_bytes(header))
}
