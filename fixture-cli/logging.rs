//! Logger setup shared by the binaries.

use log::LevelFilter;

/// Maps `-v`/`-q` counts to a log level.
///
/// Verbosity wins over quiet when both are given.
pub fn level_for(verbose: u8, quiet: u8) -> Option<LevelFilter> {
    match (verbose, quiet) {
        (0, 0) => None,
        (0, _) => Some(LevelFilter::Error),
        (1, _) => Some(LevelFilter::Info),
        (2, _) => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is honoured and defaults to `warn`; `-v`/`-q` override it.
pub fn init(verbose: u8, quiet: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level_for(verbose, quiet) {
        builder.filter_level(level);
    }

    // A second initialization only happens in tests; keep the first logger.
    let _ = builder.try_init();
}
