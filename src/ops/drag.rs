/// Screen-space bounding box of a candidate row, in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBox {
    pub top: u16,
    pub height: u16,
}

impl RowBox {
    pub fn new(top: u16, height: u16) -> Self {
        RowBox { top, height }
    }

    /// Which half of the box the pointer is in. The midpoint counts as the
    /// lower half, so a two-row card splits into content row / spacer row.
    fn half(self, pointer_y: u16) -> Half {
        let offset = pointer_y.saturating_sub(self.top);
        if u32::from(offset) * 2 >= u32::from(self.height.max(1)) {
            Half::Lower
        } else {
            Half::Upper
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Upper,
    Lower,
}

/// One in-flight reorder gesture: the pressed item and the working visual
/// order. Entries are indices into the authoritative list as it stood at
/// gesture start; the list itself is not touched until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragSession {
    source: usize,
    order: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    /// No gesture. The state at startup and after every commit or cancel.
    Idle,
    /// Pointer is down on a drag handle; the item is lifted but no drag has
    /// started yet. Release from here is a plain disarm.
    Armed { source: usize, len: usize },
    /// A drag is in progress; hovers permute the session's visual order.
    Dragging(DragSession),
}

/// Translates a pointer gesture into a list permutation.
///
/// The caller feeds it the gesture events (`press`, `hover`, `release`) and
/// owns what happens with the result: a commit yields the final visual order,
/// expressed in pre-gesture list indices, ready for `TaskStore::reorder`.
/// Cancelled or never-started gestures yield nothing, so the authoritative
/// list is untouched unless a drop actually happened.
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    state: DragState,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragCoordinator {
    pub fn new() -> Self {
        DragCoordinator {
            state: DragState::Idle,
        }
    }

    // -----------------------------------------------------------------------
    // Gesture events
    // -----------------------------------------------------------------------

    /// Pointer down on the drag handle of item `index` in a list of `len`.
    /// Arms the gesture; out-of-range presses and presses during an active
    /// gesture are ignored.
    pub fn press(&mut self, index: usize, len: usize) {
        if !matches!(self.state, DragState::Idle) {
            return;
        }
        if index >= len {
            return;
        }
        self.state = DragState::Armed { source: index, len };
    }

    /// Pointer moved over item `item` whose row occupies `bounds`, with the
    /// pointer at `pointer_y`.
    ///
    /// The first hover while armed starts the drag proper, capturing the
    /// source index and seeding the visual order with the present order.
    /// Lists shorter than two items never start dragging; there is no second
    /// position to move to.
    ///
    /// While dragging: pointer in the upper half of `bounds` places the
    /// dragged item immediately before `item` in the visual order, lower
    /// half immediately after. Repeating the same hover is a no-op, as is
    /// hovering the dragged item over itself or over an unknown index.
    pub fn hover(&mut self, pointer_y: u16, item: usize, bounds: RowBox) {
        if let DragState::Armed { source, len } = self.state {
            if len < 2 {
                return;
            }
            self.state = DragState::Dragging(DragSession {
                source,
                order: (0..len).collect(),
            });
        }

        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        place(session, item, bounds.half(pointer_y));
    }

    /// Gesture ended. `dropped` is true when the pointer was released over
    /// the drop surface; false means the gesture was abandoned.
    ///
    /// Returns the committed visual order on a real drop of a real drag, and
    /// `None` for a disarm or a cancel. Either way the coordinator is Idle
    /// afterwards.
    pub fn release(&mut self, dropped: bool) -> Option<Vec<usize>> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle | DragState::Armed { .. } => None,
            DragState::Dragging(session) => dropped.then_some(session.order),
        }
    }

    /// Abandon any gesture in progress, from any state. Used when the list
    /// is replaced out from under the gesture (an external reload).
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The armed (lifted-but-not-moving) item, if any.
    pub fn armed_index(&self) -> Option<usize> {
        match self.state {
            DragState::Armed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The item being dragged, if a drag is in progress.
    pub fn dragged_index(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging(session) => Some(session.source),
            _ => None,
        }
    }

    /// The session's visual order, if a drag is in progress. The renderer
    /// draws the list in this order instead of the store's.
    pub fn visual_order(&self) -> Option<&[usize]> {
        match &self.state {
            DragState::Dragging(session) => Some(&session.order),
            _ => None,
        }
    }
}

/// Place the dragged entry before or after `item` in the session order.
fn place(session: &mut DragSession, item: usize, half: Half) {
    if item == session.source {
        return;
    }
    let Some(dragged_pos) = session.order.iter().position(|&i| i == session.source) else {
        return;
    };
    let Some(candidate_pos) = session.order.iter().position(|&i| i == item) else {
        return;
    };

    session.order.remove(dragged_pos);
    let candidate_pos = if dragged_pos < candidate_pos {
        candidate_pos - 1
    } else {
        candidate_pos
    };
    let insert_at = match half {
        Half::Upper => candidate_pos,
        Half::Lower => candidate_pos + 1,
    };
    session.order.insert(insert_at, session.source);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
