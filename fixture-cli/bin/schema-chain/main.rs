//! DFDL schema chain generator
//!
//! Writes a chain of schema files where each one includes the next.

use std::process;

mod opts;

use opts::SchemaChainOpts;

use fixture_cli::{format_error_for_stderr, logging, run_chain_cli};

const PROGRAM_NAME: &str = "schema-chain";

fn main() -> std::io::Result<()> {
    let opts = SchemaChainOpts::parse();
    logging::init(opts.verbose, opts.quiet);

    let config = opts.config();

    if let Err(err) = run_chain_cli(&config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, opts.quiet, &err) {
            eprintln!("{msg}");
        }

        process::exit(1);
    }

    Ok(())
}
