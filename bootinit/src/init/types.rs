//! Type definitions for the bootstrap state machine.

use crate::config::BootConfig;
use crate::errors::BootError;
use crate::platform::Platform;

/// Bootstrap states. Linear; `Stalled` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootState {
    Start,
    /// Mount the process-information filesystem.
    Mount,
    /// Set the library search path.
    EnvSetup,
    /// Check the dynamic linker exists.
    VerifyLinker,
    /// Replace the process image with the runtime.
    Handoff,
    Stalled(BootError),
}

impl BootState {
    /// State reached when this one succeeds. `None` past the handoff.
    pub fn successor(&self) -> Option<BootState> {
        match self {
            Self::Start => Some(Self::Mount),
            Self::Mount => Some(Self::EnvSetup),
            Self::EnvSetup => Some(Self::VerifyLinker),
            Self::VerifyLinker => Some(Self::Handoff),
            Self::Handoff | Self::Stalled(_) => None,
        }
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self, Self::Stalled(_))
    }

    pub fn error(&self) -> Option<&BootError> {
        match self {
            Self::Stalled(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared context handed to every bootstrap task.
pub struct BootCtx<P: Platform> {
    pub config: BootConfig,
    pub platform: P,
}

impl<P: Platform> BootCtx<P> {
    pub fn new(config: BootConfig, platform: P) -> Self {
        Self { config, platform }
    }
}
