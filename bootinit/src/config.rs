use crate::constants;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Static bootstrap configuration (built once at process start, never changes).
///
/// `Default` yields the values baked into the root image. The `with_*`
/// setters exist so the sequence can run against substituted paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    // === /proc mount ===
    pub proc_source: String,
    pub proc_target: PathBuf,
    pub proc_fstype: String,

    // === Library search path ===
    pub library_path_var: String,
    /// Directories joined with `:`, overriding any inherited value.
    pub library_paths: Vec<PathBuf>,

    // === Handoff ===
    /// Checked for existence only.
    pub dynamic_linker: PathBuf,
    pub program: PathBuf,
    pub entry_script: PathBuf,

    /// Sleep between wake-ups once stalled.
    pub stall_interval: Duration,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            proc_source: constants::mount::PROC_SOURCE.to_string(),
            proc_target: PathBuf::from(constants::mount::PROC_TARGET),
            proc_fstype: constants::mount::PROC_FSTYPE.to_string(),
            library_path_var: constants::env::LIBRARY_PATH_VAR.to_string(),
            library_paths: constants::env::LIBRARY_PATHS
                .iter()
                .map(PathBuf::from)
                .collect(),
            dynamic_linker: PathBuf::from(constants::paths::DYNAMIC_LINKER),
            program: PathBuf::from(constants::paths::PROGRAM),
            entry_script: PathBuf::from(constants::paths::ENTRY_SCRIPT),
            stall_interval: Duration::from_secs(constants::stall::INTERVAL_SECS),
        }
    }
}

impl BootConfig {
    pub fn with_proc_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.proc_target = target.into();
        self
    }

    pub fn with_library_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.library_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dynamic_linker(mut self, path: impl Into<PathBuf>) -> Self {
        self.dynamic_linker = path.into();
        self
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_entry_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.entry_script = script.into();
        self
    }

    pub fn with_stall_interval(mut self, interval: Duration) -> Self {
        self.stall_interval = interval;
        self
    }

    /// Value written to the library search path variable.
    pub fn library_path_value(&self) -> OsString {
        let mut value = OsString::new();
        for (i, path) in self.library_paths.iter().enumerate() {
            if i > 0 {
                value.push(constants::env::LIBRARY_PATH_SEPARATOR);
            }
            value.push(path.as_os_str());
        }
        value
    }

    /// Argument vector for the runtime: its own path, then the entry script.
    pub fn handoff_argv(&self) -> [&PathBuf; 2] {
        [&self.program, &self.entry_script]
    }
}
