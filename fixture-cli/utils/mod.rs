//! Small shared utilities for CLI binaries.

pub mod args;
