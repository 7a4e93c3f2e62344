//! Task: replace this process with the runtime.
//!
//! On success exec never returns, so nothing after it runs. Every return
//! from this task is an error.

use super::{log_task_error, task_start};
use crate::errors::{BootError, BootResult};
use crate::init::types::BootCtx;
use crate::pipeline::PipelineTask;
use crate::platform::Platform;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use tracing::info;

pub struct HandoffTask;

impl<P: Platform> PipelineTask<BootCtx<P>> for HandoffTask {
    fn run(&self, ctx: &mut BootCtx<P>) -> BootResult<()> {
        let task_name = PipelineTask::<BootCtx<P>>::name(self);
        task_start(task_name);

        let argv = build_argv(ctx.config.handoff_argv())
            .inspect_err(|e| log_task_error(task_name, e))?;
        let program = &ctx.config.program;

        info!(
            program = %program.display(),
            argv = ?ctx.config.handoff_argv(),
            "Handing off to runtime"
        );

        let Err(errno) = ctx.platform.exec(&argv[0], &argv);
        let err = BootError::handoff(program.clone(), errno);
        log_task_error(task_name, &err);
        Err(err)
    }

    fn name(&self) -> &str {
        "handoff"
    }
}

/// argv[0] is the program path itself.
fn build_argv<T: AsRef<Path>>(args: impl IntoIterator<Item = T>) -> BootResult<Vec<CString>> {
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            CString::new(arg.as_os_str().as_bytes())
                .map_err(|_| BootError::InvalidArgument(arg.display().to_string()))
        })
        .collect()
}
