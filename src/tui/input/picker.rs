use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Tag picker overlay: pick one tag from the config's options, or clear.
pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            if let Some(picker) = app.picker.take()
                && let Some(tag) = app.config.tags.get(picker.selected).cloned()
                && app.store.set_tags(picker.task, vec![tag])
            {
                app.persist();
            }
            return;
        }
        KeyCode::Char('n') => {
            app.mode = Mode::Navigate;
            if let Some(picker) = app.picker.take()
                && app.store.set_tags(picker.task, Vec::new())
            {
                app.persist();
            }
            return;
        }
        KeyCode::Esc => {
            app.picker = None;
            app.mode = Mode::Navigate;
            return;
        }
        _ => {}
    }

    let Some(picker) = &mut app.picker else {
        app.mode = Mode::Navigate;
        return;
    };
    let options = app.config.tags.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if picker.selected + 1 < options {
                picker.selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.selected = picker.selected.saturating_sub(1);
        }
        _ => {}
    }
}
