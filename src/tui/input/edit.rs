use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, InputState, InputTarget, Mode};
use crate::util::unicode::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

/// Single-line editor for the add/edit input box.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(input) = app.input.take() {
                commit(app, input);
            } else {
                app.mode = Mode::Navigate;
            }
            return;
        }
        KeyCode::Esc => {
            app.input = None;
            app.mode = Mode::Navigate;
            return;
        }
        _ => {}
    }

    let Some(input) = &mut app.input else {
        app.mode = Mode::Navigate;
        return;
    };

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Cursor movement
        KeyCode::Left if ctrl => {
            input.cursor = word_boundary_left(&input.buffer, input.cursor);
        }
        KeyCode::Right if ctrl => {
            input.cursor = word_boundary_right(&input.buffer, input.cursor);
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&input.buffer, input.cursor) {
                input.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&input.buffer, input.cursor) {
                input.cursor = next;
            }
        }
        KeyCode::Home => input.cursor = 0,
        KeyCode::End => input.cursor = input.buffer.len(),

        // Deletion
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&input.buffer, input.cursor) {
                input.buffer.drain(prev..input.cursor);
                input.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(&input.buffer, input.cursor) {
                input.buffer.drain(input.cursor..next);
            }
        }
        KeyCode::Char('u') if ctrl => {
            input.buffer.drain(..input.cursor);
            input.cursor = 0;
        }

        // Insertion
        KeyCode::Char(c) if !ctrl => {
            input.buffer.insert(input.cursor, c);
            input.cursor += c.len_utf8();
        }

        _ => {}
    }
}

/// Apply the committed text. Text that the store rejects (empty after
/// trimming) just closes the box with the list unchanged, same as Esc.
fn commit(app: &mut App, input: InputState) {
    app.mode = Mode::Navigate;
    let changed = match input.target {
        InputTarget::Add => {
            let appended = app.store.append(&input.buffer, Vec::new());
            if appended {
                app.cursor = app.store.len() - 1;
            }
            appended
        }
        InputTarget::Edit(index) => app.store.set_text(index, &input.buffer),
    };
    if changed {
        app.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Task, TaskStore};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn editing_app(dir: &TempDir, texts: &[&str], state: InputState) -> App {
        let tasks = texts.iter().map(|t| Task::new(*t)).collect();
        let mut app = App::from_parts(
            dir.path().to_path_buf(),
            TaskStore::from_tasks(tasks),
            Config::default(),
        );
        app.mode = Mode::Input;
        app.input = Some(state);
        app
    }

    fn adding(dir: &TempDir, buffer: &str) -> App {
        editing_app(
            dir,
            &["existing"],
            InputState {
                target: InputTarget::Add,
                buffer: buffer.to_string(),
                cursor: buffer.len(),
            },
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_input(app, KeyEvent::from(code));
    }

    fn ctrl(app: &mut App, code: KeyCode) {
        handle_input(app, KeyEvent::new(code, KeyModifiers::CONTROL));
    }

    #[test]
    fn typing_inserts_at_the_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "");
        for c in "milk".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Home);
        for c in "buy ".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input.as_ref().unwrap().buffer, "buy milk");
    }

    #[test]
    fn backspace_removes_a_whole_grapheme() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "done 🎉");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.as_ref().unwrap().buffer, "done ");
    }

    #[test]
    fn arrows_step_grapheme_boundaries() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "a🎉");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.input.as_ref().unwrap().cursor, 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.input.as_ref().unwrap().cursor, 0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.input.as_ref().unwrap().cursor, 1);
    }

    #[test]
    fn ctrl_arrows_jump_words() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "water the plants");
        ctrl(&mut app, KeyCode::Left);
        assert_eq!(app.input.as_ref().unwrap().cursor, 10);
        ctrl(&mut app, KeyCode::Left);
        assert_eq!(app.input.as_ref().unwrap().cursor, 6);
        ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.input.as_ref().unwrap().cursor, 10);
    }

    #[test]
    fn ctrl_u_clears_to_the_start() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "buy milk");
        ctrl(&mut app, KeyCode::Left);
        ctrl(&mut app, KeyCode::Char('u'));
        let input = app.input.as_ref().unwrap();
        assert_eq!(input.buffer, "milk");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn enter_appends_and_moves_the_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "buy milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.store.tasks()[1].text, "buy milk");
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn enter_with_blank_text_closes_without_adding() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn enter_commits_an_edit() {
        let dir = TempDir::new().unwrap();
        let mut app = editing_app(
            &dir,
            &["buy milk"],
            InputState {
                target: InputTarget::Edit(0),
                buffer: "buy oat milk".to_string(),
                cursor: 0,
            },
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.tasks()[0].text, "buy oat milk");
    }

    #[test]
    fn blank_edit_leaves_the_task_alone() {
        let dir = TempDir::new().unwrap();
        let mut app = editing_app(
            &dir,
            &["buy milk"],
            InputState {
                target: InputTarget::Edit(0),
                buffer: "  ".to_string(),
                cursor: 0,
            },
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.tasks()[0].text, "buy milk");
    }

    #[test]
    fn esc_discards_the_buffer() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir, "half typed");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.input.is_none());
        assert_eq!(app.store.len(), 1);
    }
}
