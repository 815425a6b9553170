use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, InputState, InputTarget, Mode, TagPickerState};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // A keyboard mutation while a mouse gesture is in flight invalidates
    // the session's indices; abandon the gesture like an external reload
    // before the list changes under it.
    if !app.drag.is_idle()
        && matches!(
            key.code,
            KeyCode::Char(' ' | 'd' | 'x' | 'a' | 'e' | 't') | KeyCode::Enter
        )
    {
        app.drag.reset();
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.store.len().saturating_sub(1),

        // Mutations
        KeyCode::Char(' ') => {
            if app.store.toggle_completed(app.cursor) {
                app.persist();
            }
        }
        KeyCode::Char('d') | KeyCode::Char('x') => {
            if app.store.remove_at(app.cursor) {
                app.clamp_cursor();
                app.persist();
            }
        }

        // Overlays
        KeyCode::Char('a') => open_input(app, InputTarget::Add, String::new()),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(task) = app.store.get(app.cursor) {
                let text = task.text.clone();
                open_input(app, InputTarget::Edit(app.cursor), text);
            }
        }
        KeyCode::Char('t') => open_picker(app),

        // A keyboard escape hatch for a stuck mouse gesture
        KeyCode::Esc => {
            app.drag.release(false);
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.store.is_empty() {
        return;
    }
    let last = app.store.len() - 1;
    app.cursor = app
        .cursor
        .saturating_add_signed(delta)
        .min(last);
}

fn open_input(app: &mut App, target: InputTarget, buffer: String) {
    let cursor = buffer.len();
    app.input = Some(InputState {
        target,
        buffer,
        cursor,
    });
    app.mode = Mode::Input;
}

fn open_picker(app: &mut App) {
    if app.store.get(app.cursor).is_none() || app.config.tags.is_empty() {
        return;
    }
    // Preselect the task's current tag when it is one of the options
    let selected = app
        .store
        .get(app.cursor)
        .and_then(|task| task.tags.first())
        .and_then(|tag| app.config.tags.iter().position(|t| t == tag))
        .unwrap_or(0);
    app.picker = Some(TagPickerState {
        task: app.cursor,
        selected,
    });
    app.mode = Mode::TagPicker;
}
