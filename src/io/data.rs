use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::io::paths::tasks_path;
use crate::model::task::Task;

/// Read the task list from the data directory.
/// A missing or malformed file loads as the empty list.
pub fn load_tasks(data_dir: &Path) -> Vec<Task> {
    read_tasks(data_dir).unwrap_or_default()
}

fn read_tasks(data_dir: &Path) -> Option<Vec<Task>> {
    let content = fs::read_to_string(tasks_path(data_dir)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write the whole task list to the data directory, replacing any previous
/// contents. Creates the directory on first write.
pub fn save_tasks(data_dir: &Path, tasks: &[Task]) -> Result<(), io::Error> {
    fs::create_dir_all(data_dir)?;
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(&tasks_path(data_dir), content.as_bytes())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("buy milk"),
            Task {
                text: "write report".into(),
                completed: true,
                tags: vec!["work".into()],
            },
            Task {
                text: "book flights".into(),
                completed: false,
                tags: vec!["personal".into(), "urgent".into()],
            },
        ]
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let tasks = sample_tasks();
        save_tasks(dir.path(), &tasks).unwrap();
        let loaded = load_tasks(dir.path());
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn load_malformed_json_returns_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks.json"), "not json {{{").unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn load_wrong_shape_returns_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks.json"), r#"{"text":"lone object"}"#).unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        save_tasks(dir.path(), &sample_tasks()).unwrap();
        save_tasks(dir.path(), &[Task::new("only one left")]).unwrap();
        let loaded = load_tasks(dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "only one left");
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("deep").join("lift");
        save_tasks(&nested, &sample_tasks()).unwrap();
        assert_eq!(load_tasks(&nested), sample_tasks());
    }

    #[test]
    fn save_empty_list_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        save_tasks(dir.path(), &[]).unwrap();
        let content = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
        assert_eq!(content, "[]");
        assert!(load_tasks(dir.path()).is_empty());
    }
}
