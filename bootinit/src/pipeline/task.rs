//! Generic task trait for pipeline execution.

use crate::errors::BootResult;

/// Trait for tasks that can be executed in a pipeline.
///
/// Tasks borrow the shared context mutably for the duration of `run`.
pub trait PipelineTask<Ctx> {
    fn run(&self, ctx: &mut Ctx) -> BootResult<()>;

    /// Get human-readable task name for logging.
    fn name(&self) -> &str;
}

pub type BoxedTask<Ctx> = Box<dyn PipelineTask<Ctx>>;
