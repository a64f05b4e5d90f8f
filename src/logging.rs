//! Log setup for the binaries.

use tracing::Level;

/// Environment variable holding the maximum log level.
pub const LOG_ENV: &str = "TLPIN_LOG";

/// Parse a level name; anything unrecognized is `None`.
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}

/// Send logs to stderr, at the level named by `TLPIN_LOG` (default: warn).
pub fn init() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
