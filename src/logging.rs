//! Logging setup for the CLI
//!
//! The library only emits `tracing` events; the binary installs a
//! subscriber that writes to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `-v`
///
/// Call once, at the start of `main`.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
