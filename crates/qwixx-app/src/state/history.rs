use std::{collections::VecDeque, num::NonZero};

use qwixx_game::ScoreSheet;

use crate::{DEFAULT_MAX_HISTORY_LENGTH, undo_stack::UndoStack};

const DEFAULT_CAPACITY: NonZero<usize> = NonZero::new(DEFAULT_MAX_HISTORY_LENGTH).unwrap();

/// Snapshots of the sheet taken before each change, newest last.
///
/// Snapshots are plain [`ScoreSheet`] values; the history is never stored
/// inside the sheets it holds.
#[derive(Debug, Clone)]
pub(crate) struct History {
    stack: UndoStack<ScoreSheet>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub(crate) const fn default_capacity() -> NonZero<usize> {
        DEFAULT_CAPACITY
    }

    pub(crate) fn new() -> Self {
        Self::with_capacity(Self::default_capacity())
    }

    pub(crate) fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: UndoStack::new(capacity),
        }
    }

    /// Rebuilds a history from persisted snapshots (oldest first), dropping the
    /// oldest ones if there are more than `capacity`.
    pub(crate) fn from_entries(capacity: NonZero<usize>, entries: Vec<ScoreSheet>) -> Self {
        let mut stack = UndoStack::new(capacity);
        stack.restore_from_parts(VecDeque::from(entries));
        Self { stack }
    }

    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.stack.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &ScoreSheet> {
        self.stack.entries()
    }

    pub(crate) fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    pub(crate) fn push(&mut self, snapshot: ScoreSheet) {
        self.stack.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<ScoreSheet> {
        self.stack.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}
