//! File I/O helpers for the fixture CLI.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::config::DEFAULT_BUFFER_SIZE;
use crate::error::{Error, Result};

/// Creates (or truncates) the output file and wraps it in a buffered writer.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created, e.g. because its
/// parent directory is missing or not writable.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Opens a file for buffered reading.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Makes sure `dir` exists, creating it and any missing parents.
///
/// # Errors
///
/// Returns [`Error::CreateDirectory`] if the directory cannot be created or the path
/// exists but is not a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| Error::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    log::debug!("created directory {}", dir.display());

    Ok(())
}
