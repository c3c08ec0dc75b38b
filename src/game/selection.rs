use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Accumulates the grid cells of one drag gesture, pointer-down to
/// pointer-up. The tracker only enforces adjacency, not linearity; straight
/// lines come from how players actually drag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionTracker {
    path: Vec<Position>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Start a new gesture at `pos`, discarding any prior path
    pub fn begin(&mut self, pos: Position) {
        self.path.clear();
        self.path.push(pos);
    }

    /// Append `pos` if it extends the path by one adjacent cell. Duplicate
    /// and non-adjacent cells are silently ignored; a fast drag that skips
    /// cells just drops them rather than erroring.
    pub fn extend(&mut self, pos: Position) {
        match self.path.last() {
            Some(last) if last.is_adjacent(&pos) => self.path.push(pos),
            _ => {}
        }
    }

    /// Consume the gesture: return the accumulated path and leave the
    /// tracker empty, so every pointer-up clears the selection exactly once
    pub fn finish(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.path)
    }

    /// Replace the path wholesale (used by the hint reveal)
    pub fn set(&mut self, path: Vec<Position>) {
        self.path = path;
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
