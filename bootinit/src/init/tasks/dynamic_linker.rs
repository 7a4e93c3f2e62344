//! Task: verify the platform dynamic linker is present.
//!
//! Existence only. A linker that exists but cannot run still fails later, at
//! the handoff.

use super::{log_task_error, task_start};
use crate::errors::{BootError, BootResult};
use crate::init::types::BootCtx;
use crate::pipeline::PipelineTask;
use crate::platform::Platform;
use tracing::debug;

pub struct DynamicLinkerTask;

impl<P: Platform> PipelineTask<BootCtx<P>> for DynamicLinkerTask {
    fn run(&self, ctx: &mut BootCtx<P>) -> BootResult<()> {
        let task_name = PipelineTask::<BootCtx<P>>::name(self);
        task_start(task_name);

        let linker = &ctx.config.dynamic_linker;
        ctx.platform
            .probe(linker)
            .map_err(|source| BootError::LinkerMissing {
                path: linker.clone(),
                source,
            })
            .inspect_err(|e| log_task_error(task_name, e))?;

        debug!(path = %linker.display(), "Dynamic linker present");
        Ok(())
    }

    fn name(&self) -> &str {
        "verify_linker"
    }
}
