//! Bootstrap tasks, one per state.

mod dynamic_linker;
mod handoff;
mod library_env;
mod mount_proc;

pub use dynamic_linker::DynamicLinkerTask;
pub use handoff::HandoffTask;
pub use library_env::LibraryEnvTask;
pub use mount_proc::MountProcTask;

use crate::errors::BootError;

fn task_start(task_name: &str) {
    tracing::debug!(task = task_name, "Bootstrap step starting");
}

fn log_task_error(task_name: &str, err: &BootError) {
    tracing::debug!(task = task_name, error = %err, "Bootstrap step failed");
}
