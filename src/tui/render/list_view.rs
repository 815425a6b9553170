use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::geometry::{CARD_HEIGHT, ListGeometry, clamp_scroll};
use crate::util::unicode::{display_width, truncate_to_width};

/// Width of the handle + checkbox prefix on a card's content row.
const PREFIX_WIDTH: usize = 7;

/// Render the task list as two-row cards, in the current visual order.
/// Also records the list geometry the mouse handler hit-tests against.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        app.geometry = ListGeometry::new(area.x, area.y, area.width, area.height, 0, 0);
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let order = app.display_order();
    let visible = (area.height / CARD_HEIGHT) as usize;
    let cursor_pos = order.iter().position(|&i| i == app.cursor).unwrap_or(0);
    let max_scroll = order.len().saturating_sub(visible.max(1));
    app.scroll = clamp_scroll(cursor_pos, app.scroll.min(max_scroll), visible);
    app.geometry = ListGeometry::new(
        area.x,
        area.y,
        area.width,
        area.height,
        app.scroll,
        order.len(),
    );

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for pos in app.scroll..order.len().min(app.scroll + visible) {
        let item = order[pos];
        let Some(task) = app.store.get(item) else {
            continue;
        };

        let is_cursor = item == app.cursor;
        let is_armed = app.drag.armed_index() == Some(item);
        let is_dragged = app.drag.dragged_index() == Some(item);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let handle_style = if is_armed || is_dragged {
            Style::default()
                .fg(app.theme.highlight)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let mut text_style = if is_dragged {
            Style::default()
                .fg(app.theme.highlight)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else if is_armed {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };
        if task.completed {
            text_style = Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        // Tags take their space first; the text truncates around them
        let tags_width: usize = task
            .tags
            .iter()
            .map(|t| display_width(t) + 2) // " #tag"
            .sum();
        let text_budget = width.saturating_sub(PREFIX_WIDTH + tags_width);
        let text = truncate_to_width(&task.text, text_budget);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled("☰", handle_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox, checkbox_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(text.clone(), text_style),
        ];
        for tag in &task.tags {
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
            spans.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(app.theme.tag_color(tag)).bg(row_bg),
            ));
        }

        // Pad the cursor row so the highlight spans the full width
        if is_cursor {
            let used = PREFIX_WIDTH + display_width(&text) + tags_width;
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
        // Spacer row
        lines.push(Line::from(Span::styled(
            String::new(),
            Style::default().bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::drag::RowBox;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cards_show_handle_checkbox_text_and_tags() {
        let mut app = app_with_tasks(&[
            ("buy milk", false, &[]),
            ("write report", true, &["work"]),
            ("book flights", false, &["personal", "urgent"]),
        ]);
        let output = render_to_string(40, 8, |frame, area| {
            render_list(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " ☰ [ ] buy milk");
        assert_eq!(lines[2], " ☰ [x] write report #work");
        assert_eq!(lines[4], " ☰ [ ] book flights #personal #urgent");
    }

    #[test]
    fn empty_list_shows_the_hint() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(40, 8, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks yet. Press a to add one.");
        assert_eq!(app.geometry.count, 0);
    }

    #[test]
    fn long_text_truncates_around_the_tags() {
        let mut app = app_with_tasks(&[(
            "a very long task description that cannot fit",
            false,
            &["work"],
        )]);
        let output = render_to_string(30, 2, |frame, area| {
            render_list(frame, &mut app, area);
        });
        let line = output.lines().next().unwrap();
        assert!(line.ends_with("#work"), "tags survive truncation: {line:?}");
        assert!(line.contains('\u{2026}'), "text is elided: {line:?}");
        assert!(display_width(line) <= 30);
    }

    #[test]
    fn drag_session_reorders_the_drawn_cards() {
        let mut app = app_with_tasks(&[("a", false, &[]), ("b", false, &[]), ("c", false, &[])]);
        app.drag.press(0, 3);
        app.drag.hover(3, 1, RowBox::new(2, 2));

        let output = render_to_string(20, 6, |frame, area| {
            render_list(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " ☰ [ ] b");
        assert_eq!(lines[2], " ☰ [ ] a");
        assert_eq!(lines[4], " ☰ [ ] c");
        // The authoritative list is untouched mid-gesture
        assert_eq!(app.store.tasks()[0].text, "a");
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let mut app = app_with_tasks(&[
            ("one", false, &[]),
            ("two", false, &[]),
            ("three", false, &[]),
            ("four", false, &[]),
        ]);
        app.cursor = 3;
        // Two cards fit
        let output = render_to_string(20, 4, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll, 2);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " ☰ [ ] three");
        assert!(lines[2].starts_with(" ☰ [ ] four"));
    }

    #[test]
    fn geometry_reflects_the_rendered_frame() {
        let mut app = app_with_tasks(&[("a", false, &[]), ("b", false, &[])]);
        render_to_string(20, 6, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(app.geometry.count, 2);
        assert_eq!(app.geometry.card_box(0), Some(RowBox::new(0, 2)));
        assert_eq!(app.geometry.card_box(1), Some(RowBox::new(2, 2)));
    }
}
