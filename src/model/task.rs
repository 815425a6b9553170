use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display text, trimmed and non-empty
    pub text: String,
    /// Whether the task is checked off
    #[serde(default)]
    pub completed: bool,
    /// Tags (without `#` prefix); usually 0 or 1, but any number round-trips
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Create a new unchecked task. The text is trimmed here so every
    /// construction site stores the same canonical form.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into().trim().to_string(),
            completed: false,
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_text() {
        let task = Task::new("  water the plants  ");
        assert_eq!(task.text, "water the plants");
        assert!(!task.completed);
        assert!(task.tags.is_empty());
    }

    #[test]
    fn deserialize_minimal_object() {
        let task: Task = serde_json::from_str(r#"{"text": "call mom"}"#).unwrap();
        assert_eq!(task.text, "call mom");
        assert!(!task.completed);
        assert!(task.tags.is_empty());
    }

    #[test]
    fn deserialize_full_object() {
        let task: Task =
            serde_json::from_str(r#"{"text": "ship it", "completed": true, "tags": ["work", "urgent"]}"#)
                .unwrap();
        assert!(task.completed);
        assert_eq!(task.tags, vec!["work", "urgent"]);
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let task: Task =
            serde_json::from_str(r#"{"text": "ok", "completed": false, "color": "red"}"#).unwrap();
        assert_eq!(task.text, "ok");
    }

    #[test]
    fn serialize_round_trip() {
        let mut task = Task::new("review draft");
        task.completed = true;
        task.tags = vec!["work".to_string()];
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
