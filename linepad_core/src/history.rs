//! Undo/redo history of whole-buffer snapshots

use alloc::vec::Vec;
use core::mem;

use crate::buffer::TextBuffer;

/// Immutable copy of the buffer taken before a mutation
///
/// The cursor is not recorded; callers re-clamp it after a restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    buffer: TextBuffer,
}

impl BufferSnapshot {
    pub fn capture(buffer: &TextBuffer) -> Self {
        Self {
            buffer: buffer.clone(),
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> TextBuffer {
        self.buffer
    }
}

/// Linear undo/redo stacks
///
/// Depth is unbounded and consecutive edits are never coalesced.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<BufferSnapshot>,
    redo_stack: Vec<BufferSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-edit buffer and drop the redo chain
    pub fn checkpoint(&mut self, buffer: &TextBuffer) {
        self.undo_stack.push(BufferSnapshot::capture(buffer));
        self.redo_stack.clear();
        log::debug!(
            "history checkpoint: undo_depth={}",
            self.undo_stack.len()
        );
    }

    /// Swap `buffer` with the most recent undo snapshot
    ///
    /// Returns `false` and leaves `buffer` alone when there is nothing to undo.
    pub fn undo(&mut self, buffer: &mut TextBuffer) -> bool {
        Self::step(&mut self.undo_stack, &mut self.redo_stack, buffer)
    }

    /// Swap `buffer` with the most recently undone snapshot
    pub fn redo(&mut self, buffer: &mut TextBuffer) -> bool {
        Self::step(&mut self.redo_stack, &mut self.undo_stack, buffer)
    }

    fn step(
        from: &mut Vec<BufferSnapshot>,
        to: &mut Vec<BufferSnapshot>,
        buffer: &mut TextBuffer,
    ) -> bool {
        match from.pop() {
            Some(snapshot) => {
                let current = mem::replace(buffer, snapshot.into_buffer());
                to.push(BufferSnapshot { buffer: current });
                true
            }
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(content: &str) -> TextBuffer {
        TextBuffer::from_string(content.into())
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_restores_checkpoint() {
        let mut history = History::new();
        let mut current = buffer("before");
        history.checkpoint(&current);
        current = buffer("after");

        assert!(history.undo(&mut current));
        assert_eq!(current, buffer("before"));
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 1);
    }

    #[test]
    fn test_redo_reapplies_undone_state() {
        let mut history = History::new();
        let mut current = buffer("before");
        history.checkpoint(&current);
        current = buffer("after");

        history.undo(&mut current);
        assert!(history.redo(&mut current));
        assert_eq!(current, buffer("after"));
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_empty_stacks_leave_buffer_alone() {
        let mut history = History::new();
        let mut current = buffer("same");
        assert!(!history.undo(&mut current));
        assert!(!history.redo(&mut current));
        assert_eq!(current, buffer("same"));
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new();
        let mut current = buffer("one");
        history.checkpoint(&current);
        current = buffer("two");
        history.undo(&mut current);
        assert!(history.can_redo());

        history.checkpoint(&current);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut current));
    }

    #[test]
    fn test_depth_is_unbounded() {
        let mut history = History::new();
        let current = buffer("x");
        for _ in 0..500 {
            history.checkpoint(&current);
        }
        assert_eq!(history.undo_depth(), 500);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        let mut current = buffer("x");
        history.checkpoint(&current);
        history.checkpoint(&current);
        history.undo(&mut current);
        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
