//! Linear undo/redo history of reversible document edits.

use crate::shapes::Shape;
use serde::{Deserialize, Serialize};

/// Maximum number of undo steps to keep.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// History tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Undo depth; the oldest step is dropped beyond this.
    pub limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// A reversible edit of the committed shape list.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// A shape was appended at the tail.
    AppendShape(Shape),
    /// Every shape was removed; holds the removed list in order.
    Clear(Vec<Shape>),
}

impl EditAction {
    /// Perform the edit on `shapes`.
    fn apply(&self, shapes: &mut Vec<Shape>) {
        match self {
            EditAction::AppendShape(shape) => shapes.push(shape.clone()),
            EditAction::Clear(_) => shapes.clear(),
        }
    }

    /// Undo the edit on `shapes`.
    fn revert(&self, shapes: &mut Vec<Shape>) {
        match self {
            EditAction::AppendShape(_) => {
                shapes.pop();
            }
            EditAction::Clear(removed) => *shapes = removed.clone(),
        }
    }
}

/// Undo and redo stacks.
///
/// Recording a new action clears the redo stack, so redo is only possible
/// directly after undo.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history keeping at most `limit` undo steps.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record an action that has already been applied.
    pub fn record(&mut self, action: EditAction) {
        self.undo_stack.push(action);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the most recent action against `shapes`.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, shapes: &mut Vec<Shape>) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        action.revert(shapes);
        self.redo_stack.push(action);
        true
    }

    /// Re-apply the most recently undone action against `shapes`.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, shapes: &mut Vec<Shape>) -> bool {
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };
        action.apply(shapes);
        self.undo_stack.push(action);
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Forget all recorded actions.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
