//! bootinit: minimal PID 1 for a container or VM root filesystem.
//!
//! Runs one linear sequence and hands off:
//!
//! ```text
//! Start → Mount (/proc) → EnvSetup (LD_LIBRARY_PATH) → VerifyLinker → Handoff (execv)
//!            │                                             │             │
//!            └──────────────────── Stalled ◄───────────────┴─────────────┘
//! ```
//!
//! Any failure parks the process in the stall state. PID 1 never exits.
//!
//! # Example
//!
//! ```ignore
//! use bootinit::{BootConfig, Bootstrapper, NativePlatform};
//!
//! Bootstrapper::new(BootConfig::default(), NativePlatform::new()).run()
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod init;
pub mod logging;
pub mod pipeline;
pub mod platform;
pub mod stall;

pub use config::BootConfig;
pub use errors::{BootError, BootResult, FailureKind, HandoffCause};
pub use init::{BootState, Bootstrapper};
pub use platform::{NativePlatform, Platform};
pub use stall::Stall;
