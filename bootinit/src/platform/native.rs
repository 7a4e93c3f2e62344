//! Native platform backed by Linux syscalls.
//!
//! mount(2) requires CAP_SYS_ADMIN; as PID 1 of a container or VM we have it.

use super::Platform;
use crate::errors::BootError;
use nix::mount::{MsFlags, mount};
use nix::sys::statfs::{PROC_SUPER_MAGIC, statfs};
use nix::unistd::{AccessFlags, access, execv};
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for NativePlatform {
    fn is_proc_mounted(&self, target: &Path) -> bool {
        statfs(target)
            .map(|stat| stat.filesystem_type() == PROC_SUPER_MAGIC)
            .unwrap_or(false)
    }

    fn mount(&mut self, source: &str, target: &Path, fstype: &str) -> nix::Result<()> {
        mount(
            Some(source),
            target,
            Some(fstype),
            MsFlags::empty(),
            None::<&str>,
        )
    }

    fn set_env(&mut self, key: &str, value: &OsStr) {
        // SAFETY: the bootstrapper is single-threaded; nothing else reads or
        // writes the environment concurrently.
        unsafe { std::env::set_var(key, value) };
        debug!(key, value = %value.to_string_lossy(), "Environment variable set");
    }

    fn probe(&mut self, path: &Path) -> nix::Result<()> {
        access(path, AccessFlags::F_OK)
    }

    fn exec(&mut self, program: &CStr, argv: &[CString]) -> nix::Result<Infallible> {
        execv(program, argv)
    }

    fn sleep(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }

    fn report(&mut self, err: &BootError) {
        error!(step = err.step(), kind = ?err.kind(), "{}", err);
    }
}
