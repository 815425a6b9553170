use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::progress::Progress;
use crate::tui::app::App;

/// Render the header: title row, progress bar row, spacer row.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let progress = Progress::of(app.store.tasks());

    // Title left, completion count right
    let title = " lift";
    let count = format!("{}/{} done ", progress.completed, progress.total);
    let mut title_spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = title.chars().count() + count.chars().count();
    if used < width {
        title_spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    title_spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));

    // Progress bar, one cell margin each side
    let bar_width = width.saturating_sub(2);
    let filled = (progress.ratio() * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);
    let fill_color = if progress.all_complete() {
        app.theme.green
    } else {
        app.theme.highlight
    };
    let bar_spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "━".repeat(filled),
            Style::default().fg(fill_color).bg(bg),
        ),
        Span::styled(
            "─".repeat(bar_width - filled),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    let lines = vec![
        Line::from(title_spans),
        Line::from(bar_spans),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
