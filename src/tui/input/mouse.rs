use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Mode};
use crate::tui::geometry::Region;

/// Map raw mouse events onto the gesture capability set (press / hover /
/// release) plus the plain click actions. Hit-testing goes through the
/// geometry captured at the last render, so what the user clicked is what
/// was drawn.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // The overlays are keyboard-only
    if app.mode != Mode::Navigate {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_down(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(app, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => on_up(app, mouse.row),
        MouseEventKind::ScrollUp => scroll_by(app, -1),
        MouseEventKind::ScrollDown => scroll_by(app, 1),
        _ => {}
    }
}

fn on_down(app: &mut App, x: u16, y: u16) {
    let Some((pos, region)) = app.geometry.hit_test(x, y) else {
        return;
    };
    let order = app.display_order();
    let Some(&item) = order.get(pos) else {
        return;
    };

    app.cursor = item;
    match region {
        Region::Handle => app.drag.press(item, app.store.len()),
        Region::Checkbox => {
            if app.store.toggle_completed(item) {
                app.persist();
            }
        }
        Region::Body => {}
    }
}

fn on_drag(app: &mut App, y: u16) {
    if app.drag.is_idle() {
        return;
    }
    let Some(pos) = app.geometry.position_at(y) else {
        return;
    };
    let order = app.display_order();
    let Some(&item) = order.get(pos) else {
        return;
    };
    let Some(bounds) = app.geometry.card_box(pos) else {
        return;
    };
    app.drag.hover(y, item, bounds);
}

fn on_up(app: &mut App, y: u16) {
    let dropped = app.geometry.contains_row(y);
    let Some(order) = app.drag.release(dropped) else {
        return;
    };

    // Keep the cursor on the task that was dragged
    let cursor_after = order.iter().position(|&i| i == app.cursor);
    match app.store.reorder(&order) {
        Ok(()) => {
            if let Some(pos) = cursor_after {
                app.cursor = pos;
            }
            app.persist();
        }
        Err(e) => {
            // A session producing a bad permutation is a coordinator bug;
            // the store has already rejected it atomically.
            debug_assert!(false, "drag session committed {}", e);
            app.status = Some(crate::tui::app::Status {
                text: format!("reorder rejected: {}", e),
                is_error: true,
            });
        }
    }
}

fn scroll_by(app: &mut App, delta: isize) {
    let max_scroll = app
        .geometry
        .count
        .saturating_sub(app.geometry.visible_cards());
    app.scroll = app
        .scroll
        .saturating_add_signed(delta)
        .min(max_scroll);
}
