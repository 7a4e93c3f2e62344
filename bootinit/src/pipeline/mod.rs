//! Table-driven step execution.
//!
//! ```text
//! ExecutionPlan → Stages → Task
//!
//! - ExecutionPlan: ordered table of stages
//! - Stage: binds one task to the state it runs in
//! - Task: atomic unit of work over a shared context
//! ```
//!
//! Execution is strictly sequential. The caller decides what happens between
//! tasks (the bootstrapper advances its state machine one stage at a time).

mod metrics;
#[allow(clippy::module_inception)]
mod pipeline;
mod stage;
mod task;

pub use metrics::{PipelineMetrics, TaskMetrics};
pub use pipeline::{ExecutionPlan, PipelineExecutor};
pub use stage::Stage;
pub use task::{BoxedTask, PipelineTask};
