//! Task: set the dynamic-library search path.
//!
//! Always overwrites. The value is inherited by the runtime across exec.
//! The built-in entry cannot fail; only a substituted config with a
//! malformed name or value is rejected, before the environment is touched.

use super::{log_task_error, task_start};
use crate::errors::{BootError, BootResult};
use crate::init::types::BootCtx;
use crate::pipeline::PipelineTask;
use crate::platform::Platform;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use tracing::info;

pub struct LibraryEnvTask;

impl<P: Platform> PipelineTask<BootCtx<P>> for LibraryEnvTask {
    fn run(&self, ctx: &mut BootCtx<P>) -> BootResult<()> {
        let task_name = PipelineTask::<BootCtx<P>>::name(self);
        task_start(task_name);

        let var = &ctx.config.library_path_var;
        let value = ctx.config.library_path_value();
        check_env_entry(var, &value).inspect_err(|e| log_task_error(task_name, e))?;

        ctx.platform.set_env(var, &value);

        info!(
            var = %var,
            value = %value.to_string_lossy(),
            "Library search path set"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "library_env"
    }
}

/// Rejects entries `std::env::set_var` would panic on.
fn check_env_entry(var: &str, value: &OsStr) -> BootResult<()> {
    let reason = if var.is_empty() {
        Some("name is empty")
    } else if var.contains('=') {
        Some("name contains '='")
    } else if var.contains('\0') {
        Some("name contains a NUL byte")
    } else if value.as_bytes().contains(&0) {
        Some("value contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(BootError::InvalidEnvironment {
            var: var.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
