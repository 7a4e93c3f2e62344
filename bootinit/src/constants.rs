//! Bootstrap constants.
//!
//! Centralized location for the fixed paths and values baked into the image.

/// Process-information filesystem mount
pub mod mount {
    /// Source argument passed to mount(2)
    pub const PROC_SOURCE: &str = "proc";

    /// Mount point for the process-information filesystem
    pub const PROC_TARGET: &str = "/proc";

    /// Filesystem type
    pub const PROC_FSTYPE: &str = "proc";
}

/// Environment handed to the runtime
pub mod env {
    /// Dynamic-library search path variable
    pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

    /// Directories placed on the search path, in order
    pub const LIBRARY_PATHS: [&str; 2] = ["/usr/lib", "/lib64"];

    /// Separator between search path entries
    pub const LIBRARY_PATH_SEPARATOR: &str = ":";
}

/// Fixed filesystem locations inside the root image
pub mod paths {
    /// Platform dynamic linker
    pub const DYNAMIC_LINKER: &str = "/lib64/ld-linux-x86-64.so.2";

    /// Runtime that replaces this process
    pub const PROGRAM: &str = "/usr/bin/julia";

    /// Entry script passed to the runtime as its only argument
    pub const ENTRY_SCRIPT: &str = "/app/init.jl";
}

/// Terminal stall state
pub mod stall {
    /// Wake interval in seconds
    pub const INTERVAL_SECS: u64 = 1;
}
