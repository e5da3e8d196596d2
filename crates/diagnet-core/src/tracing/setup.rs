//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter used when `DIAGNET_LOG` is unset, empty, or unparsable.
pub const DEFAULT_FILTER: &str = "diagnet=info";

/// Build the log filter from a directive string such as the value of
/// `DIAGNET_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the diagnet tracing/logging system.
///
/// Reads the `DIAGNET_LOG` environment variable for per-crate log levels.
/// Format: `DIAGNET_LOG=diagnet_model=debug,diagnet_storage=warn`
///
/// Falls back to `diagnet=info` if `DIAGNET_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());

        // try_init: a host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
