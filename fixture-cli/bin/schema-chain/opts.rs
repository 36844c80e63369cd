//! Command line argument parsing for the schema-chain utility.

use std::path::PathBuf;

use clap::Parser;

use fixture_cli::{parse_chain_length, ChainConfig};
use fixture_core::config::{DEFAULT_CHAIN_LENGTH, DEFAULT_INCLUDE_PREFIX};

/// DFDL schema chain generator
///
/// Writes chain_001.dfdl.xsd ... chain_NNN.dfdl.xsd where every file includes the
/// next one, for exercising deep xs:include chains.
#[derive(Debug, Parser)]
#[command(
    name = "schema-chain",
    version,
    about = "Generate a chain of DFDL schemas that include each other"
)]
pub struct SchemaChainOpts {
    /// Number of schema files in the chain
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        value_parser = parse_chain_length,
        default_value_t = DEFAULT_CHAIN_LENGTH
    )]
    count: u32,

    /// Directory to write the files into
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// Path prefix used in each xs:include schemaLocation
    #[arg(long = "include-prefix", value_name = "PREFIX", default_value = DEFAULT_INCLUDE_PREFIX)]
    include_prefix: String,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output; specify twice to also suppress error messages
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl SchemaChainOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build configuration from the parsed options
    pub fn config(&self) -> ChainConfig {
        ChainConfig {
            count: self.count,
            directory: self.directory.clone(),
            include_prefix: self.include_prefix.clone(),
        }
    }
}
