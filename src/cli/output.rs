use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub number: usize,
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

pub fn task_to_json(number: usize, task: &Task) -> TaskJson {
    TaskJson {
        number,
        text: task.text.clone(),
        completed: task.completed,
        tags: task.tags.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary: `[x]  2. text #tag`
pub fn format_task_line(number: usize, task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    let tags_str = if task.tags.is_empty() {
        String::new()
    } else {
        format!(
            " {}",
            task.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        )
    };
    format!("[{}] {:>2}. {}{}", mark, number, task.text, tags_str)
}
