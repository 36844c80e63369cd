//! Binary blob fixture generator
//!
//! Writes a blob of the requested size and reports the payload byte count and MD5.

use std::process;

mod opts;

use opts::GenBlobOpts;

use fixture_cli::{format_error_for_stderr, logging, run_blob_cli};

const PROGRAM_NAME: &str = "gen-blob";

fn main() -> std::io::Result<()> {
    let opts = GenBlobOpts::parse();
    logging::init(opts.verbose, opts.quiet);

    let config = opts.config();

    if let Err(err) = run_blob_cli(&config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, opts.quiet, &err) {
            eprintln!("{msg}");
        }

        process::exit(1);
    }

    Ok(())
}
