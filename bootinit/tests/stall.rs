//! Stall state against real time: alive after N wake cycles, not busy-looping.

use bootinit::{BootConfig, BootError, Bootstrapper, Platform, Stall};
use nix::errno::Errno;
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(100);

/// Platform that really sleeps and counts wake-ups.
#[derive(Clone, Default)]
struct SleepingPlatform {
    wakes: Arc<AtomicUsize>,
    reports: Arc<Mutex<Vec<String>>>,
    execs: Arc<AtomicUsize>,
    mount_error: Option<Errno>,
}

impl Platform for SleepingPlatform {
    fn is_proc_mounted(&self, _target: &Path) -> bool {
        false
    }

    fn mount(&mut self, _source: &str, _target: &Path, _fstype: &str) -> nix::Result<()> {
        match self.mount_error {
            Some(errno) => Err(errno),
            None => Ok(()),
        }
    }

    fn set_env(&mut self, _key: &str, _value: &OsStr) {}

    fn probe(&mut self, _path: &Path) -> nix::Result<()> {
        Ok(())
    }

    fn exec(&mut self, _program: &CStr, _argv: &[CString]) -> nix::Result<Infallible> {
        self.execs.fetch_add(1, Ordering::SeqCst);
        Err(Errno::ENOENT)
    }

    fn sleep(&mut self, interval: Duration) {
        thread::sleep(interval);
        self.wakes.fetch_add(1, Ordering::SeqCst);
    }

    fn report(&mut self, error: &BootError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}

#[test]
fn stall_keeps_waking_at_interval() {
    let platform = SleepingPlatform::default();
    let wakes = Arc::clone(&platform.wakes);

    let handle = thread::spawn(move || {
        let mut platform = platform;
        Stall::new(INTERVAL).park(&mut platform);
    });

    thread::sleep(INTERVAL * 5 + INTERVAL / 2);

    assert!(!handle.is_finished());
    let observed = wakes.load(Ordering::SeqCst);
    assert!(
        (3..=7).contains(&observed),
        "expected about 5 wake cycles, saw {observed}"
    );
}

#[test]
fn failed_mount_parks_after_single_report() {
    let platform = SleepingPlatform {
        mount_error: Some(Errno::EPERM),
        ..SleepingPlatform::default()
    };
    let wakes = Arc::clone(&platform.wakes);
    let reports = Arc::clone(&platform.reports);
    let execs = Arc::clone(&platform.execs);

    let config = BootConfig::default().with_stall_interval(INTERVAL);
    let handle = thread::spawn(move || {
        Bootstrapper::new(config, platform).run();
    });

    thread::sleep(INTERVAL * 4);

    assert!(!handle.is_finished());
    assert!(wakes.load(Ordering::SeqCst) >= 2);
    assert_eq!(execs.load(Ordering::SeqCst), 0);

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("/proc"));
}

#[test]
fn failed_exec_parks_instead_of_exiting() {
    let platform = SleepingPlatform::default();
    let reports = Arc::clone(&platform.reports);
    let execs = Arc::clone(&platform.execs);

    let config = BootConfig::default().with_stall_interval(INTERVAL);
    let handle = thread::spawn(move || {
        Bootstrapper::new(config, platform).run();
    });

    thread::sleep(INTERVAL * 3);

    assert!(!handle.is_finished());
    assert_eq!(execs.load(Ordering::SeqCst), 1);

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("/usr/bin/julia"));
}
