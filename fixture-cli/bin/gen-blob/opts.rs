//! Command line argument parsing for the gen-blob utility.

use std::path::PathBuf;

use clap::Parser;

use fixture_cli::{parse_megabytes, BlobConfig};

/// Binary blob fixture generator
///
/// Writes an 8-byte big-endian length header followed by a payload of repeated
/// DEADBEEF chunks, then prints the number of payload bytes written and their MD5.
#[derive(Debug, Parser)]
#[command(
    name = "gen-blob",
    version,
    about = "Generate a binary blob fixture",
    long_about = "Writes an 8-byte big-endian length header (size * 1024000) followed by \
                 a payload of repeated DEADBEEF chunks, then prints the number of payload \
                 bytes written and the MD5 hash of the payload."
)]
pub struct GenBlobOpts {
    /// Specify the size of the generated file in MB
    #[arg(short = 's', long = "size", value_name = "MB", value_parser = parse_megabytes)]
    size: u64,

    /// Path to the file that will be generated
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,

    /// Read the file back after writing and check header, length and hash
    #[arg(long = "verify")]
    verify: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output; specify twice to also suppress error messages
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl GenBlobOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build configuration from the parsed options
    pub fn config(&self) -> BlobConfig {
        BlobConfig {
            size: self.size,
            output: self.output.clone(),
            verify: self.verify,
        }
    }
}
