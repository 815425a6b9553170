use crate::model::task::Task;

/// Completion counts derived from the task list itself, never from what was
/// last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Progress {
            completed: tasks.iter().filter(|t| t.completed).count(),
            total: tasks.len(),
        }
    }

    /// Completion ratio in [0, 1]. An empty list is 0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// True when there is at least one task and every task is done.
    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Rising-edge detector for the all-complete state.
///
/// Fires exactly once on the transition into fully complete, stays quiet
/// while the list remains complete, and re-arms when completion drops back
/// below 100%.
#[derive(Debug, Clone, Default)]
pub struct CompletionEdge {
    was_complete: bool,
}

impl CompletionEdge {
    pub fn new() -> Self {
        CompletionEdge {
            was_complete: false,
        }
    }

    /// Observe the current progress; true exactly on the rising edge.
    pub fn observe(&mut self, progress: Progress) -> bool {
        let complete = progress.all_complete();
        let fired = complete && !self.was_complete;
        self.was_complete = complete;
        fired
    }
}
