//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` wins when set. Otherwise the level comes from the number of
/// `-v` flags: warnings by default, `info` for one, `debug` for two or more.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("tally_ledger={}", level)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
