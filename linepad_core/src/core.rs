//! EditorCore state machine
//!
//! Owns the buffer, cursor and history, and exposes one method per user
//! command. Every mutating method checkpoints the whole buffer first.

use alloc::string::String;

use crate::{
    action::EditorAction,
    buffer::{Position, TextBuffer},
    history::History,
    render::{RenderedView, DEFAULT_CURSOR_MARKER},
    snapshot::EditorSnapshot,
};

/// Outcome from applying an operation to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreOutcome {
    /// Continue editing (no state change)
    Continue,
    /// State changed (buffer edited, cursor moved, history restored)
    Changed,
    /// Delete requested at end of line; nothing was recorded
    NothingToDelete,
}

impl CoreOutcome {
    fn from_moved(moved: bool) -> Self {
        if moved {
            CoreOutcome::Changed
        } else {
            CoreOutcome::Continue
        }
    }
}

/// Editor core state machine
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    buffer: TextBuffer,
    cursor: Position,
    history: History,
}

impl EditorCore {
    /// Create a new editor holding one empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the outcome
    pub fn apply(&mut self, action: EditorAction) -> CoreOutcome {
        match action {
            EditorAction::InsertText(text) => self.insert_text(&text),
            EditorAction::InsertLines(texts) => self.insert_lines(texts),
            EditorAction::DeleteChar => self.delete_char_at_cursor(),
            EditorAction::MoveLeft => self.move_left(),
            EditorAction::MoveRight => self.move_right(),
            EditorAction::MoveUp => self.move_up(),
            EditorAction::MoveDown => self.move_down(),
            EditorAction::NewLine => self.new_line(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
        }
    }

    // Mutating operations

    /// Insert text at the cursor and advance past it
    pub fn insert_text(&mut self, text: &str) -> CoreOutcome {
        self.history.checkpoint(&self.buffer);
        if self.buffer.insert_str(self.cursor, text) {
            self.cursor.col += text.chars().count();
        }
        log::debug!("insert_text: {} chars at {:?}", text.chars().count(), self.cursor);
        CoreOutcome::Changed
    }

    /// Split the current line at the cursor and insert `texts` as whole lines
    /// between head and tail. The cursor lands at the start of the tail.
    pub fn insert_lines<I, S>(&mut self, texts: I) -> CoreOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history.checkpoint(&self.buffer);
        let tail = self.buffer.split_line(self.cursor).unwrap_or_default();

        let mut row = self.cursor.row;
        for text in texts {
            row += 1;
            self.buffer.insert_line(row, text.into());
        }

        row += 1;
        self.buffer.insert_line(row, tail);
        log::debug!(
            "insert_lines: {} lines after row {}",
            row - self.cursor.row - 1,
            self.cursor.row
        );
        self.cursor = Position::new(row, 0);
        CoreOutcome::Changed
    }

    /// Delete the character just after the cursor; never joins lines
    pub fn delete_char_at_cursor(&mut self) -> CoreOutcome {
        if self.cursor.col >= self.buffer.line_length(self.cursor.row) {
            log::debug!("delete_char: nothing to delete at {:?}", self.cursor);
            return CoreOutcome::NothingToDelete;
        }

        self.history.checkpoint(&self.buffer);
        self.buffer.delete_char(self.cursor);
        log::debug!("delete_char at {:?}", self.cursor);
        CoreOutcome::Changed
    }

    /// Split the current line at the cursor and move to the new line
    pub fn new_line(&mut self) -> CoreOutcome {
        self.history.checkpoint(&self.buffer);
        let tail = self.buffer.split_line(self.cursor).unwrap_or_default();
        self.buffer.insert_line(self.cursor.row + 1, tail);
        self.cursor = Position::new(self.cursor.row + 1, 0);
        log::debug!("new_line: cursor now {:?}", self.cursor);
        CoreOutcome::Changed
    }

    // Cursor movement

    pub fn move_left(&mut self) -> CoreOutcome {
        let moved = self.cursor.move_left(&self.buffer);
        log::trace!("move_left: {:?} moved={}", self.cursor, moved);
        CoreOutcome::from_moved(moved)
    }

    pub fn move_right(&mut self) -> CoreOutcome {
        let moved = self.cursor.move_right(&self.buffer);
        log::trace!("move_right: {:?} moved={}", self.cursor, moved);
        CoreOutcome::from_moved(moved)
    }

    pub fn move_up(&mut self) -> CoreOutcome {
        let moved = self.cursor.move_up(&self.buffer);
        log::trace!("move_up: {:?} moved={}", self.cursor, moved);
        CoreOutcome::from_moved(moved)
    }

    pub fn move_down(&mut self) -> CoreOutcome {
        let moved = self.cursor.move_down(&self.buffer);
        log::trace!("move_down: {:?} moved={}", self.cursor, moved);
        CoreOutcome::from_moved(moved)
    }

    // Undo/redo

    /// Restore the buffer from before the last edit; silent when nothing to undo
    pub fn undo(&mut self) -> CoreOutcome {
        if !self.history.undo(&mut self.buffer) {
            log::debug!("undo: already at oldest change");
            return CoreOutcome::Continue;
        }
        self.cursor = self.buffer.clamp(self.cursor);
        log::debug!(
            "undo: undo_depth={} redo_depth={}",
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        CoreOutcome::Changed
    }

    /// Reapply the last undone edit; silent when nothing to redo
    pub fn redo(&mut self) -> CoreOutcome {
        if !self.history.redo(&mut self.buffer) {
            log::debug!("redo: already at newest change");
            return CoreOutcome::Continue;
        }
        self.cursor = self.buffer.clamp(self.cursor);
        log::debug!(
            "redo: undo_depth={} redo_depth={}",
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        CoreOutcome::Changed
    }

    // Rendering

    pub fn render(&self) -> RenderedView {
        self.render_with_marker(DEFAULT_CURSOR_MARKER)
    }

    pub fn render_with_marker(&self, marker: &str) -> RenderedView {
        RenderedView::new(&self.buffer, self.cursor, marker)
    }

    /// Get a complete snapshot of editor state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            cursor: self.cursor,
            buffer_lines: self.buffer.lines().to_vec(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
        }
    }

    // Public accessors for rendering/testing

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // Public API for loading content
    pub fn load_content(&mut self, content: String) {
        self.buffer = TextBuffer::from_string(content);
        self.cursor = Position::zero();
        self.history.clear();
    }

    /// Place the cursor, clamped onto the buffer
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp(pos);
    }
}
