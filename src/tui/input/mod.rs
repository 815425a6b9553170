mod edit;
mod mouse;
mod navigate;
mod picker;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input => edit::handle_input(app, key),
        Mode::TagPicker => picker::handle_picker(app, key),
    }
}

/// Handle a mouse event (gesture detection lives here)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    mouse::handle_mouse(app, mouse);
}
