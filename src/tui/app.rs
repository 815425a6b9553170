use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::data::{load_tasks, save_tasks};
use crate::io::lock::FileLock;
use crate::io::paths::{CONFIG_FILE, TASKS_FILE};
use crate::io::watcher::{DataWatcher, FileEvent};
use crate::model::{Config, TaskStore};
use crate::ops::drag::DragCoordinator;
use crate::ops::progress::{CompletionEdge, Progress};

use super::geometry::ListGeometry;
use super::input;
use super::render;
use super::render::confetti::Confetti;
use super::theme::Theme;

/// Cadence of the event loop's timed work (confetti frames)
const TICK: Duration = Duration::from_millis(50);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input,
    TagPicker,
}

/// What the input box is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    /// Appending a new task
    Add,
    /// Replacing the text of an existing task
    Edit(usize),
}

/// State of the single-line input overlay
#[derive(Debug, Clone)]
pub struct InputState {
    pub target: InputTarget,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

/// State of the tag picker overlay
#[derive(Debug, Clone)]
pub struct TagPickerState {
    /// Task the picked tag is assigned to
    pub task: usize,
    /// Selected row among the config's tag options
    pub selected: usize,
}

/// A message shown in the status row until the next mutation clears it
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub data_dir: PathBuf,
    pub store: TaskStore,
    pub drag: DragCoordinator,
    pub edge: CompletionEdge,
    pub config: Config,
    pub theme: Theme,
    pub mode: Mode,
    /// Cursor as a task list index (not a visual position)
    pub cursor: usize,
    pub scroll: usize,
    pub input: Option<InputState>,
    pub picker: Option<TagPickerState>,
    pub confetti: Option<Confetti>,
    /// List placement from the last render; the mouse handler's map
    pub geometry: ListGeometry,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(data_dir: &Path) -> Self {
        let config = load_config(data_dir);
        let store = TaskStore::from_tasks(load_tasks(data_dir));
        Self::from_parts(data_dir.to_path_buf(), store, config)
    }

    /// Build an App from already-loaded state. Used by `new` and by tests
    /// that don't want to touch the filesystem.
    pub fn from_parts(data_dir: PathBuf, store: TaskStore, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        let mut app = App {
            data_dir,
            store,
            drag: DragCoordinator::new(),
            edge: CompletionEdge::new(),
            config,
            theme,
            mode: Mode::Navigate,
            cursor: 0,
            scroll: 0,
            input: None,
            picker: None,
            confetti: None,
            geometry: ListGeometry::default(),
            status: None,
            should_quit: false,
        };
        // A list loaded fully complete celebrates on startup
        app.observe_progress();
        app
    }

    /// The order the list is drawn in: the drag session's visual order
    /// while a drag is in progress, the store's order otherwise.
    pub fn display_order(&self) -> Vec<usize> {
        match self.drag.visual_order() {
            Some(order) => order.to_vec(),
            None => (0..self.store.len()).collect(),
        }
    }

    /// Visual position of the cursor's task.
    pub fn cursor_position(&self) -> usize {
        self.display_order()
            .iter()
            .position(|&i| i == self.cursor)
            .unwrap_or(0)
    }

    pub fn clamp_cursor(&mut self) {
        if self.cursor >= self.store.len() {
            self.cursor = self.store.len().saturating_sub(1);
        }
    }

    /// Save the list after a mutation. The mutation has already happened;
    /// this persists it and then feeds the progress signal, in that order.
    /// An I/O failure leaves the in-memory list authoritative and reports
    /// in the status row.
    pub fn persist(&mut self) {
        self.status = None;
        let saved = FileLock::acquire_default(&self.data_dir)
            .map_err(|e| e.to_string())
            .and_then(|_lock| {
                save_tasks(&self.data_dir, self.store.tasks()).map_err(|e| e.to_string())
            });
        if let Err(message) = saved {
            self.status = Some(Status {
                text: format!("save failed: {}", message),
                is_error: true,
            });
        }
        self.observe_progress();
    }

    /// Feed the completion edge; a rising edge starts the confetti, and
    /// dropping below fully-complete stops any run early.
    fn observe_progress(&mut self) {
        let progress = Progress::of(self.store.tasks());
        if self.edge.observe(progress) {
            self.confetti = Some(Confetti::start());
        } else if !progress.all_complete() {
            self.confetti = None;
        }
    }

    /// Apply a file change reported by the watcher.
    pub fn handle_file_event(&mut self, event: &FileEvent) {
        let FileEvent::Changed(paths) = event;
        for path in paths {
            match path.file_name().and_then(|n| n.to_str()) {
                Some(TASKS_FILE) => self.reload_tasks(),
                Some(CONFIG_FILE) => self.reload_config(),
                _ => {}
            }
        }
    }

    /// Reload the task list from disk after an external edit.
    ///
    /// The watcher also echoes our own saves; a reload that matches the
    /// in-memory list is dropped so it can't churn the cursor or an active
    /// gesture. A real change cancels any gesture first (the session's
    /// indices no longer mean anything), then replaces the list.
    fn reload_tasks(&mut self) {
        let tasks = load_tasks(&self.data_dir);
        if tasks == self.store.tasks() {
            return;
        }
        self.drag.reset();
        self.store = TaskStore::from_tasks(tasks);
        self.clamp_cursor();
        self.observe_progress();
    }

    fn reload_config(&mut self) {
        self.config = load_config(&self.data_dir);
        self.theme = Theme::from_config(&self.config.ui);
    }
}

/// Run the TUI application
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(data_dir);

    // Watch the data dir for external edits; a watch failure only means no
    // live reload, not a broken app.
    let watcher = DataWatcher::start(data_dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&DataWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if let Some(watcher) = watcher {
            for event in watcher.poll() {
                app.handle_file_event(&event);
            }
        }

        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();
            if let Some(confetti) = &mut app.confetti {
                confetti.advance();
                if confetti.done() {
                    app.confetti = None;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn test_app(tasks: Vec<Task>) -> App {
        App::from_parts(
            PathBuf::from("/tmp/lift-test"),
            TaskStore::from_tasks(tasks),
            Config::default(),
        )
    }

    fn done(text: &str) -> Task {
        let mut t = Task::new(text);
        t.completed = true;
        t
    }

    #[test]
    fn display_order_is_identity_outside_a_drag() {
        let app = test_app(vec![Task::new("a"), Task::new("b"), Task::new("c")]);
        assert_eq!(app.display_order(), vec![0, 1, 2]);
    }

    #[test]
    fn display_order_follows_the_drag_session() {
        let mut app = test_app(vec![Task::new("a"), Task::new("b"), Task::new("c")]);
        app.drag.press(0, 3);
        app.drag
            .hover(3, 1, crate::ops::drag::RowBox::new(2, 2));
        assert_eq!(app.display_order(), vec![1, 0, 2]);
        // The cursor's task is still found at its visual position
        assert_eq!(app.cursor_position(), 1);
    }

    #[test]
    fn clamp_cursor_after_removal() {
        let mut app = test_app(vec![Task::new("a"), Task::new("b")]);
        app.cursor = 1;
        app.store.remove_at(1);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        app.store.remove_at(0);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn startup_with_complete_list_celebrates() {
        let app = test_app(vec![done("a"), done("b")]);
        assert!(app.confetti.is_some());
    }

    #[test]
    fn startup_with_open_tasks_does_not() {
        let app = test_app(vec![done("a"), Task::new("b")]);
        assert!(app.confetti.is_none());
    }

    #[test]
    fn confetti_stops_when_completion_drops() {
        let mut app = test_app(vec![done("a")]);
        assert!(app.confetti.is_some());
        app.store.append("b", vec![]);
        app.observe_progress();
        assert!(app.confetti.is_none());
    }
}
