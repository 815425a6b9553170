use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, InputTarget};

const MAX_INNER_WIDTH: u16 = 50;

/// Render the add/edit input box overlay
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let Some(input) = &app.input else {
        return;
    };

    let bg = app.theme.background;
    let inner_w = area.width.saturating_sub(4).min(MAX_INNER_WIDTH);
    let popup_w = inner_w + 2;
    let popup_h = 3;
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(popup_w)) / 2,
        y: area.y + area.height / 3,
        width: popup_w.min(area.width),
        height: popup_h.min(area.height),
    };

    let title = match input.target {
        InputTarget::Add => " add task ",
        InputTarget::Edit(_) => " edit task ",
    };

    // Buffer split at the cursor, block cursor in between
    let before = &input.buffer[..input.cursor];
    let after = &input.buffer[input.cursor..];
    let line = Line::from(vec![
        Span::styled(
            " > ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(bg))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(line).block(block), popup);
}
