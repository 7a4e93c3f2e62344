//! Stage definition for table-driven execution.

/// A stage binds a task to the state in which it runs.
///
/// Generic over state type S and task type T.
#[derive(Debug, Clone)]
pub struct Stage<S, T> {
    pub state: S,
    pub task: T,
}

impl<S, T> Stage<S, T> {
    pub fn new(state: S, task: T) -> Self {
        Self { state, task }
    }
}
