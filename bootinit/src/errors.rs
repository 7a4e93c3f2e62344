//! Error types for the bootstrap sequence.

use nix::errno::Errno;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bootstrap operations
pub type BootResult<T> = std::result::Result<T, BootError>;

/// The two failure families a bootstrap can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Mount or linker precondition failed.
    Setup,
    /// Image replacement failed or returned.
    Handoff,
}

/// Classified reason an exec call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffCause {
    MissingExecutable,
    PermissionDenied,
    BadFormat,
    Other,
}

impl HandoffCause {
    pub fn from_errno(errno: Errno) -> Self {
        match errno {
            Errno::ENOENT | Errno::ENOTDIR => Self::MissingExecutable,
            Errno::EACCES | Errno::EPERM => Self::PermissionDenied,
            Errno::ENOEXEC | Errno::ELIBBAD => Self::BadFormat,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for HandoffCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingExecutable => "executable or interpreter not found",
            Self::PermissionDenied => "permission denied",
            Self::BadFormat => "unsupported executable format",
            Self::Other => "exec failed",
        };
        f.write_str(text)
    }
}

/// Errors that stop the bootstrap sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    #[error("Failed to mount {fstype} at {}: {source}", .target.display())]
    Mount {
        target: PathBuf,
        fstype: String,
        #[source]
        source: Errno,
    },

    #[error("Failed to access {}: {source}", .path.display())]
    LinkerMissing {
        path: PathBuf,
        #[source]
        source: Errno,
    },

    #[error("Invalid environment variable {var:?}: {reason}")]
    InvalidEnvironment { var: String, reason: &'static str },

    #[error("Invalid handoff argument {0:?}: contains a NUL byte")]
    InvalidArgument(String),

    #[error("Failed to exec {}: {cause} ({source})", .program.display())]
    Handoff {
        program: PathBuf,
        cause: HandoffCause,
        #[source]
        source: Errno,
    },

    #[error("exec of {} returned without replacing the process image", .0.display())]
    HandoffReturned(PathBuf),
}

impl BootError {
    pub fn handoff(program: impl Into<PathBuf>, errno: Errno) -> Self {
        Self::Handoff {
            program: program.into(),
            cause: HandoffCause::from_errno(errno),
            source: errno,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Mount { .. } | Self::InvalidEnvironment { .. } | Self::LinkerMissing { .. } => {
                FailureKind::Setup
            }
            Self::InvalidArgument(_) | Self::Handoff { .. } | Self::HandoffReturned(_) => {
                FailureKind::Handoff
            }
        }
    }

    /// Name of the step that produced this error.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Mount { .. } => "mount_proc",
            Self::InvalidEnvironment { .. } => "library_env",
            Self::LinkerMissing { .. } => "verify_linker",
            Self::InvalidArgument(_) | Self::Handoff { .. } | Self::HandoffReturned(_) => {
                "handoff"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_error_display() {
        let err = BootError::Mount {
            target: PathBuf::from("/proc"),
            fstype: "proc".to_string(),
            source: Errno::EPERM,
        };
        let msg = err.to_string();
        assert!(msg.contains("/proc"));
        assert!(msg.contains("proc"));
        assert_eq!(err.kind(), FailureKind::Setup);
        assert_eq!(err.step(), "mount_proc");
    }

    #[test]
    fn test_linker_error_names_path() {
        let err = BootError::LinkerMissing {
            path: PathBuf::from("/lib64/ld-linux-x86-64.so.2"),
            source: Errno::ENOENT,
        };
        assert!(err.to_string().contains("/lib64/ld-linux-x86-64.so.2"));
        assert_eq!(err.kind(), FailureKind::Setup);
    }

    #[test]
    fn test_invalid_environment_is_setup_failure() {
        let err = BootError::InvalidEnvironment {
            var: "LD_LIBRARY_PATH".to_string(),
            reason: "value contains a NUL byte",
        };
        assert!(err.to_string().contains("LD_LIBRARY_PATH"));
        assert_eq!(err.kind(), FailureKind::Setup);
        assert_eq!(err.step(), "library_env");
    }

    #[test]
    fn test_handoff_cause_classification() {
        assert_eq!(
            HandoffCause::from_errno(Errno::ENOENT),
            HandoffCause::MissingExecutable
        );
        assert_eq!(
            HandoffCause::from_errno(Errno::EACCES),
            HandoffCause::PermissionDenied
        );
        assert_eq!(
            HandoffCause::from_errno(Errno::ENOEXEC),
            HandoffCause::BadFormat
        );
        assert_eq!(HandoffCause::from_errno(Errno::E2BIG), HandoffCause::Other);
    }

    #[test]
    fn test_handoff_error_display() {
        let err = BootError::handoff("/usr/bin/julia", Errno::EACCES);
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/julia"));
        assert!(msg.contains("permission denied"));
        assert_eq!(err.kind(), FailureKind::Handoff);
        assert_eq!(err.step(), "handoff");
    }

    #[test]
    fn test_source_is_errno() {
        use std::error::Error;

        let err = BootError::handoff("/usr/bin/julia", Errno::ENOENT);
        assert!(err.source().is_some());
    }
}
