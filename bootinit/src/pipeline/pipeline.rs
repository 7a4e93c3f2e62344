//! Sequential pipeline execution.

use super::metrics::TaskMetrics;
use super::stage::Stage;
use super::task::BoxedTask;
use crate::errors::BootResult;
use std::time::Instant;

pub struct ExecutionPlan<S, Ctx> {
    stages: Vec<Stage<S, BoxedTask<Ctx>>>,
}

impl<S: PartialEq, Ctx> ExecutionPlan<S, Ctx> {
    pub fn new(stages: Vec<Stage<S, BoxedTask<Ctx>>>) -> Self {
        Self { stages }
    }

    /// Stage bound to `state`, if any.
    pub fn stage(&self, state: &S) -> Option<&Stage<S, BoxedTask<Ctx>>> {
        self.stages.iter().find(|stage| &stage.state == state)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.stages.iter().map(|stage| &stage.state)
    }
}

/// Runs a single task and times it.
pub struct PipelineExecutor;

impl PipelineExecutor {
    pub fn run_task<Ctx>(task: &BoxedTask<Ctx>, ctx: &mut Ctx) -> BootResult<TaskMetrics> {
        let name = task.name().to_string();
        let task_start = Instant::now();
        task.run(ctx)?;
        Ok(TaskMetrics {
            name,
            duration_ms: task_start.elapsed().as_millis(),
        })
    }
}
