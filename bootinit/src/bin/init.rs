//! PID 1 entry point.

use bootinit::constants::stall::INTERVAL_SECS;
use bootinit::{BootConfig, Bootstrapper, NativePlatform, Stall, logging};
use std::time::Duration;

fn main() {
    logging::init();
    install_panic_hook();

    let pid = nix::unistd::getpid().as_raw();
    if pid != 1 {
        tracing::warn!(pid, "Not running as PID 1; continuing anyway");
    }

    Bootstrapper::new(BootConfig::default(), NativePlatform::new()).run()
}

/// A panic must not take PID 1 down with it.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Bootstrap panicked: {}", info);
        Stall::new(Duration::from_secs(INTERVAL_SECS)).park(&mut NativePlatform::new())
    }));
}
