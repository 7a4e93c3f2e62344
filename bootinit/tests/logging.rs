//! Failure diagnostics survive a restrictive `RUST_LOG`.

use bootinit::logging;
use tracing::Level;

#[test]
fn error_events_survive_rust_log_off() {
    // SAFETY: the only test in this binary; set before any thread reads it.
    unsafe { std::env::set_var("RUST_LOG", "off") };
    logging::init();

    assert!(tracing::enabled!(target: "bootinit::platform::native", Level::ERROR));
    assert!(tracing::enabled!(target: "bootinit::init", Level::ERROR));

    // Everything else still follows RUST_LOG.
    assert!(!tracing::enabled!(target: "bootinit::init", Level::INFO));
    assert!(!tracing::enabled!(target: "other_crate", Level::ERROR));
}
