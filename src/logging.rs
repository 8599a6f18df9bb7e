//! Logging initialization
//!
//! The library only emits `tracing` events; binaries call [`init`] once to
//! install a stderr subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter for a `-v` count: 0 → warn, 1 → info, 2 → debug, 3+ → trace
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fieldcompare=warn",
        1 => "fieldcompare=info",
        2 => "fieldcompare=debug",
        _ => "fieldcompare=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `verbosity`.
/// Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
