pub mod confetti;
pub mod header;
pub mod input_box;
pub mod list_view;
pub mod status_row;
pub mod tag_picker;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Draws the full frame and any overlay for the current mode.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (title + progress) | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays
    match app.mode {
        Mode::Input => input_box::render_input_box(frame, app, area),
        Mode::TagPicker => tag_picker::render_tag_picker(frame, app, area),
        Mode::Navigate => {}
    }

    if app.confetti.is_some() {
        confetti::render_confetti(frame, app, chunks[1]);
    }
}
