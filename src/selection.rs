//! The state machine behind a pointer drag across the grid.

use log::trace;

use crate::coord::Coord;

/// Whether a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No pointer is held down.
    #[default]
    Idle,

    /// The pointer is held down and the selection follows it.
    Selecting,
}

/// What an event did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// A new selection started at the cell, highlighted with the palette colour at `color`.
    Started {
        /// The first cell.
        cell: Coord,

        /// The palette index of the new selection.
        color: usize,
    },

    /// The cell was appended.
    Extended(Coord),

    /// The cell was dropped from the end, because the pointer moved back onto the cell before it.
    Retracted(Coord),

    /// The event was ignored.
    Unchanged,
}

/// Tracks the player's in-progress selection. The path is always a simple four-adjacent walk: it grows by one
/// adjacent cell or shrinks by one cell per [SelectionController::enter].
#[derive(Clone, Debug)]
pub struct SelectionController {
    state: SelectionState,
    path: Vec<Coord>,
    palette_len: usize,
    next_color: usize,
    color: Option<usize>,
}

impl SelectionController {
    /// Creates an idle controller cycling through `palette_len` colours. A zero length is treated as one colour.
    pub fn new(palette_len: usize) -> Self {
        Self {
            state: SelectionState::Idle,
            path: Vec::new(),
            palette_len: palette_len.max(1),
            next_color: 0,
            color: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The selected cells in the order they were entered. Empty when idle.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// The palette index of the current or most recent selection.
    pub fn color(&self) -> Option<usize> {
        self.color
    }

    /// The pointer went down on `cell`: any leftover selection is dropped and a new one starts there with the next
    /// palette colour.
    pub fn press(&mut self, cell: Coord) -> SelectionChange {
        self.path.clear();
        self.path.push(cell);

        let color = self.next_color;
        self.next_color = (self.next_color + 1) % self.palette_len;
        self.color = Some(color);
        self.state = SelectionState::Selecting;

        trace!("selection started at {cell} with colour {color}");

        SelectionChange::Started { cell, color }
    }

    /// The pointer moved onto `cell`. Ignored unless a selection is in progress.
    pub fn enter(&mut self, cell: Coord) -> SelectionChange {
        if self.state != SelectionState::Selecting {
            return SelectionChange::Unchanged;
        }

        let Some(&last) = self.path.last() else {
            return self.press(cell);
        };

        if cell == last {
            return SelectionChange::Unchanged;
        }

        if self.path.len() >= 2 && self.path[self.path.len() - 2] == cell {
            self.path.pop();
            trace!("selection retracted from {last}");

            return SelectionChange::Retracted(last);
        }

        if last.is_four_adjacent(cell) && !self.path.contains(&cell) {
            self.path.push(cell);
            trace!("selection extended to {cell}");

            return SelectionChange::Extended(cell);
        }

        SelectionChange::Unchanged
    }

    /// The pointer was released. Returns the finished selection, or [`Option::None`] if none was in progress. The
    /// controller is idle and its path empty afterwards.
    pub fn release(&mut self) -> Option<Vec<Coord>> {
        if self.state != SelectionState::Selecting {
            return None;
        }

        self.state = SelectionState::Idle;

        Some(std::mem::take(&mut self.path))
    }

    /// Drops any selection in progress without finishing it.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.path.clear();
    }
}
