use crate::model::task::Task;

/// Error type for store operations.
///
/// These indicate a caller bug (a malformed permutation reaching `reorder`),
/// not bad user input; invalid user input is rejected as a silent no-op by
/// the individual operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reorder expected {expected} indices, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("reorder index {0} out of range")]
    IndexOutOfRange(usize),
    #[error("reorder index {0} appears more than once")]
    DuplicateIndex(usize),
}

/// The authoritative ordered task list.
///
/// The list is only reachable through the operations below; during a drag
/// gesture the coordinator works on its own visual ordering and commits
/// through `reorder` on drop, so the store never sees a half-finished move.
///
/// Mutating operations return whether the list changed. Callers save and
/// re-render only on `true`, in that order: mutate, then persist, then
/// render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new unchecked task. Text that is empty after trimming is
    /// rejected as a no-op.
    pub fn append(&mut self, text: &str, tags: Vec<String>) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let mut task = Task::new(text);
        task.tags = tags;
        self.tasks.push(task);
        true
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    /// Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return false;
        }
        self.tasks.remove(index);
        true
    }

    /// Replace the text of the task at `index`. Out of range or text that
    /// is empty after trimming is a no-op.
    pub fn set_text(&mut self, index: usize, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.text = trimmed.to_string();
                true
            }
            None => false,
        }
    }

    /// Set the completion flag of the task at `index`. Out of range is a
    /// no-op.
    pub fn set_completed(&mut self, index: usize, completed: bool) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Flip the completion flag of the task at `index`.
    pub fn toggle_completed(&mut self, index: usize) -> bool {
        match self.tasks.get(index) {
            Some(task) => {
                let flipped = !task.completed;
                self.set_completed(index, flipped)
            }
            None => false,
        }
    }

    /// Replace the tag list of the task at `index`. Out of range is a no-op.
    pub fn set_tags(&mut self, index: usize, tags: Vec<String>) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.tags = tags;
                true
            }
            None => false,
        }
    }

    /// Replace the list with its own elements taken in `new_order`.
    ///
    /// `new_order` must be a permutation of `0..len`. The argument is fully
    /// validated before any mutation, so on error the list is unchanged.
    /// This is the single entry point the drag coordinator commits through.
    pub fn reorder(&mut self, new_order: &[usize]) -> Result<(), StoreError> {
        let n = self.tasks.len();
        if new_order.len() != n {
            return Err(StoreError::WrongLength {
                expected: n,
                actual: new_order.len(),
            });
        }
        let mut seen = vec![false; n];
        for &index in new_order {
            if index >= n {
                return Err(StoreError::IndexOutOfRange(index));
            }
            if seen[index] {
                return Err(StoreError::DuplicateIndex(index));
            }
            seen[index] = true;
        }

        // Validated as a bijection over 0..n, safe to rebuild
        self.tasks = new_order
            .iter()
            .map(|&index| self.tasks[index].clone())
            .collect();
        Ok(())
    }
}
