//! Kernel-facing capabilities used by the bootstrap sequence.
//!
//! Every side effect the bootstrapper has goes through [`Platform`]:
//! - Linux: [`NativePlatform`] issues the real syscalls
//! - Tests: a recording fake substitutes paths and failures

use crate::errors::BootError;
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr};
use std::path::Path;
use std::time::Duration;

pub use native::NativePlatform;

mod native;

/// Trait for the kernel calls the bootstrapper depends on.
pub trait Platform {
    /// Whether `target` already carries a proc filesystem.
    fn is_proc_mounted(&self, target: &Path) -> bool;

    /// mount(2) with no flags and no data argument.
    fn mount(&mut self, source: &str, target: &Path, fstype: &str) -> nix::Result<()>;

    /// Overwrite a process environment variable.
    fn set_env(&mut self, key: &str, value: &OsStr);

    /// Existence check only (`F_OK`).
    fn probe(&mut self, path: &Path) -> nix::Result<()>;

    /// Replace the process image. Returns only on failure.
    fn exec(&mut self, program: &CStr, argv: &[CString]) -> nix::Result<Infallible>;

    fn sleep(&mut self, interval: Duration);

    /// Emit a failure diagnostic on the process's error stream.
    fn report(&mut self, error: &BootError);
}
