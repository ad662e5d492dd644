use crate::board::{BoardSnapshot, Point};

/// One reversible engine action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UndoEntry {
    /// A card moved from `src` to `dst` while the cursor was at `cursor`.
    Move { src: Point, dst: Point, cursor: Option<Point> },
    /// A shuffle; `snapshot` is the board before it.
    Shuffle { snapshot: BoardSnapshot, cursor: Option<Point> },
}

impl UndoEntry {
    pub fn label(&self) -> &'static str {
        match self {
            UndoEntry::Move { .. } => "Move",
            UndoEntry::Shuffle { .. } => "Shuffle",
        }
    }
}

/// Stack of reversible actions, most recent last.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    entries: Vec<UndoEntry>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The action the next undo would revert.
    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }
}
