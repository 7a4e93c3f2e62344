//! Task: mount the process-information filesystem.

use super::{log_task_error, task_start};
use crate::errors::{BootError, BootResult};
use crate::init::types::BootCtx;
use crate::pipeline::PipelineTask;
use crate::platform::Platform;
use tracing::{info, warn};

pub struct MountProcTask;

impl<P: Platform> PipelineTask<BootCtx<P>> for MountProcTask {
    fn run(&self, ctx: &mut BootCtx<P>) -> BootResult<()> {
        let task_name = PipelineTask::<BootCtx<P>>::name(self);
        task_start(task_name);

        let config = &ctx.config;

        // A restarted bootstrapper finds /proc already mounted. The mount is
        // still issued: the kernel stacks a fresh proc instance on top, and any
        // error it returns is a real failure.
        if ctx.platform.is_proc_mounted(&config.proc_target) {
            warn!(
                mount_point = %config.proc_target.display(),
                "proc is already mounted; mounting another instance over it"
            );
        }

        ctx.platform
            .mount(
                &config.proc_source,
                &config.proc_target,
                &config.proc_fstype,
            )
            .map_err(|source| BootError::Mount {
                target: config.proc_target.clone(),
                fstype: config.proc_fstype.clone(),
                source,
            })
            .inspect_err(|e| log_task_error(task_name, e))?;

        info!(mount_point = %config.proc_target.display(), "Mounted proc");
        Ok(())
    }

    fn name(&self) -> &str {
        "mount_proc"
    }
}
