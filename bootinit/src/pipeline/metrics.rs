use tracing::debug;

#[derive(Debug, Clone)]
pub struct TaskMetrics {
    pub name: String,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineMetrics {
    pub tasks: Vec<TaskMetrics>,
}

impl PipelineMetrics {
    pub fn record(&mut self, task: TaskMetrics) {
        self.tasks.push(task);
    }

    pub fn task_duration_ms(&self, name: &str) -> Option<u128> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .map(|task| task.duration_ms)
    }

    pub fn total_duration_ms(&self) -> u128 {
        self.tasks.iter().map(|task| task.duration_ms).sum()
    }

    pub fn log_steps(&self) {
        for task in &self.tasks {
            debug!(task = %task.name, duration_ms = task.duration_ms, "Bootstrap step finished");
        }
        debug!(
            total_ms = self.total_duration_ms(),
            steps = self.tasks.len(),
            "Bootstrap steps complete"
        );
    }
}
