//! Diagnostic output.
//!
//! Events go to stderr as plain text lines. `RUST_LOG` overrides the
//! default filter, but never hides this crate's `error` events: failure
//! diagnostics are the only trace a stalled PID 1 leaves.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::{FilterExt, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_FILTER: &str = "info";

/// Target prefix of every event this crate emits.
const CRATE_TARGET: &str = "bootinit";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let diagnostics = Targets::new().with_target(CRATE_TARGET, LevelFilter::ERROR);

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter.or(diagnostics));

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
