use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): messages left, key hints right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(status) = &app.status {
        let color = if status.is_error {
            app.theme.red
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).bg(bg),
        ));
    }

    if app.config.ui.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => "a add  e edit  t tag  d delete  Space done  q quit",
            Mode::Input => "Enter save  Esc cancel",
            Mode::TagPicker => "Enter assign  n none  Esc cancel",
        };
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count() + 1;
        if content_width + hint_width <= width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    if spans.is_empty() {
        spans.push(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
