//! Bootstrap orchestration.
//!
//! ## Architecture
//!
//! A linear state machine driven by a table of tasks:
//!
//! ```text
//!   Start
//!   1. Mount          (mount proc at /proc)        ── fail → Stalled
//!   2. EnvSetup       (LD_LIBRARY_PATH, overwrite)    never fails
//!   3. VerifyLinker   (dynamic linker exists)      ── fail → Stalled
//!   4. Handoff        (execv runtime entry-script) ── fail → Stalled
//! ```
//!
//! Each step's success is a strict precondition for the next. Nothing is
//! rolled back. `Stalled` reports once, then the process parks forever.

mod tasks;
mod types;

pub use types::{BootCtx, BootState};

use crate::config::BootConfig;
use crate::errors::BootError;
use crate::pipeline::{BoxedTask, ExecutionPlan, PipelineExecutor, PipelineMetrics, Stage};
use crate::platform::Platform;
use crate::stall::Stall;
use tasks::{DynamicLinkerTask, HandoffTask, LibraryEnvTask, MountProcTask};
use tracing::info;

// ============================================================================
// EXECUTION PLAN
// ============================================================================

fn get_execution_plan<P: Platform + 'static>() -> ExecutionPlan<BootState, BootCtx<P>> {
    let stages: Vec<Stage<BootState, BoxedTask<BootCtx<P>>>> = vec![
        Stage::new(BootState::Mount, Box::new(MountProcTask)),
        Stage::new(BootState::EnvSetup, Box::new(LibraryEnvTask)),
        Stage::new(BootState::VerifyLinker, Box::new(DynamicLinkerTask)),
        Stage::new(BootState::Handoff, Box::new(HandoffTask)),
    ];

    ExecutionPlan::new(stages)
}

/// Drives the bootstrap sequence to the handoff or the stall state.
///
/// # Example
///
/// ```ignore
/// Bootstrapper::new(BootConfig::default(), NativePlatform::new()).run()
/// ```
pub struct Bootstrapper<P: Platform + 'static> {
    ctx: BootCtx<P>,
    plan: ExecutionPlan<BootState, BootCtx<P>>,
    state: BootState,
    metrics: PipelineMetrics,
    stall: Stall,
}

impl<P: Platform + 'static> Bootstrapper<P> {
    pub fn new(config: BootConfig, platform: P) -> Self {
        let stall = Stall::new(config.stall_interval);
        Self {
            ctx: BootCtx::new(config, platform),
            plan: get_execution_plan(),
            state: BootState::Start,
            metrics: PipelineMetrics::default(),
            stall,
        }
    }

    pub fn state(&self) -> &BootState {
        &self.state
    }

    pub fn config(&self) -> &BootConfig {
        &self.ctx.config
    }

    pub fn platform(&self) -> &P {
        &self.ctx.platform
    }

    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Perform one transition and return the new state.
    ///
    /// Entering `Stalled` reports the cause exactly once. Stepping while
    /// stalled is a no-op.
    pub fn step(&mut self) -> &BootState {
        if self.state.is_stalled() {
            return &self.state;
        }

        let next = match &self.state {
            BootState::Start => BootState::Mount,
            state => match self.plan.stage(state) {
                Some(stage) => {
                    if *state == BootState::Handoff {
                        self.metrics.log_steps();
                    }
                    match PipelineExecutor::run_task(&stage.task, &mut self.ctx) {
                        Ok(task_metrics) => {
                            self.metrics.record(task_metrics);
                            state.successor().unwrap_or_else(|| {
                                BootState::Stalled(BootError::HandoffReturned(
                                    self.ctx.config.program.clone(),
                                ))
                            })
                        }
                        Err(err) => BootState::Stalled(err),
                    }
                }
                None => BootState::Stalled(BootError::HandoffReturned(
                    self.ctx.config.program.clone(),
                )),
            },
        };

        if let BootState::Stalled(err) = &next {
            self.ctx.platform.report(err);
        }
        self.state = next;
        &self.state
    }

    /// Run the sequence. Returns only by replacing the process image.
    pub fn run(mut self) -> ! {
        info!(
            program = %self.ctx.config.program.display(),
            entry_script = %self.ctx.config.entry_script.display(),
            "Bootstrap starting"
        );

        while !self.state.is_stalled() {
            self.step();
        }

        self.stall.park(&mut self.ctx.platform)
    }
}
