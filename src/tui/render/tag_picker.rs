use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const INNER_WIDTH: u16 = 24;

/// Render the tag picker overlay: one row per config tag
pub fn render_tag_picker(frame: &mut Frame, app: &App, area: Rect) {
    let Some(picker) = &app.picker else {
        return;
    };

    let bg = app.theme.background;
    let inner_w = INNER_WIDTH.min(area.width.saturating_sub(2));
    let popup_w = inner_w + 2;
    let popup_h = (app.config.tags.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(popup_w)) / 2,
        y: area.y + area.height / 3,
        width: popup_w.min(area.width),
        height: popup_h,
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, tag) in app.config.tags.iter().enumerate() {
        let is_selected = i == picker.selected;
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };
        let marker = if is_selected { " > " } else { "   " };
        let mut spans = vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("#{}", tag),
                Style::default().fg(app.theme.tag_color(tag)).bg(row_bg),
            ),
        ];
        let used = 3 + 1 + tag.chars().count();
        if is_selected && used < inner_w as usize {
            spans.push(Span::styled(
                " ".repeat(inner_w as usize - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tag ")
        .style(Style::default().bg(bg))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
