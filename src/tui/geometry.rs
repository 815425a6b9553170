//! List geometry shared by the renderer and the mouse handler.
//!
//! Row boxes are computed per frame from the same state the renderer draws
//! from, so hit-testing and the drawn list can never disagree.

use crate::ops::drag::RowBox;

/// Every task renders as a two-row card: content row + spacer row.
pub const CARD_HEIGHT: u16 = 2;

/// Columns (relative to the list area's left edge) occupied by the `☰`
/// drag handle on a card's content row.
const HANDLE_COLS: std::ops::Range<u16> = 0..3;
/// Columns occupied by the `[ ]` checkbox.
const CHECKBOX_COLS: std::ops::Range<u16> = 3..6;

/// What part of a card the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Handle,
    Checkbox,
    Body,
}

/// The list area's on-screen placement for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListGeometry {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    /// First visible card (index into the visual order)
    pub scroll: usize,
    /// Number of cards in the list
    pub count: usize,
}

impl ListGeometry {
    pub fn new(left: u16, top: u16, width: u16, height: u16, scroll: usize, count: usize) -> Self {
        ListGeometry {
            left,
            top,
            width,
            height,
            scroll,
            count,
        }
    }

    /// How many whole cards fit in the area.
    pub fn visible_cards(&self) -> usize {
        (self.height / CARD_HEIGHT) as usize
    }

    /// Screen box of the card at visual position `pos`, if it is on screen.
    pub fn card_box(&self, pos: usize) -> Option<RowBox> {
        if pos < self.scroll || pos >= self.count {
            return None;
        }
        let offset = (pos - self.scroll) as u16 * CARD_HEIGHT;
        if offset + CARD_HEIGHT > self.height {
            return None;
        }
        Some(RowBox::new(self.top + offset, CARD_HEIGHT))
    }

    /// Visual position of the card under screen row `y`.
    pub fn position_at(&self, y: u16) -> Option<usize> {
        if y < self.top || y >= self.top + self.height {
            return None;
        }
        let pos = self.scroll + ((y - self.top) / CARD_HEIGHT) as usize;
        self.card_box(pos).map(|_| pos)
    }

    /// Card position and region under the pointer, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(usize, Region)> {
        let pos = self.position_at(y)?;
        let col = x.checked_sub(self.left)?;
        if col >= self.width {
            return None;
        }
        let region = if HANDLE_COLS.contains(&col) {
            Region::Handle
        } else if CHECKBOX_COLS.contains(&col) {
            Region::Checkbox
        } else {
            Region::Body
        };
        Some((pos, region))
    }

    /// Whether screen row `y` falls inside the list area (the drop surface).
    pub fn contains_row(&self, y: u16) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Clamp a scroll offset so the card at `cursor_pos` stays fully on screen.
pub fn clamp_scroll(cursor_pos: usize, scroll: usize, visible: usize) -> usize {
    if visible == 0 {
        return scroll;
    }
    if cursor_pos < scroll {
        cursor_pos
    } else if cursor_pos >= scroll + visible {
        cursor_pos + 1 - visible
    } else {
        scroll
    }
}
