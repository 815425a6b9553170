use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Task, TaskStore};
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App from `(text, completed, tags)` triples, off the filesystem.
pub fn app_with_tasks(rows: &[(&str, bool, &[&str])]) -> App {
    let tasks: Vec<Task> = rows
        .iter()
        .map(|(text, completed, tags)| Task {
            text: (*text).to_string(),
            completed: *completed,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect();
    App::from_parts(
        PathBuf::from("/tmp/lift-test"),
        TaskStore::from_tasks(tasks),
        Config::default(),
    )
}
