//! Cursor navigation
//!
//! Each move returns `true` when the position changed and `false` on a
//! boundary no-op. A position that starts valid for the buffer stays valid.

use crate::buffer::{Position, TextBuffer};

impl Position {
    /// Step left, wrapping to the end of the previous line
    pub fn move_left(&mut self, buffer: &TextBuffer) -> bool {
        if self.col > 0 {
            self.col -= 1;
            true
        } else if self.row > 0 {
            self.row -= 1;
            self.col = buffer.line_length(self.row);
            true
        } else {
            false
        }
    }

    /// Step right, wrapping to the start of the next line
    pub fn move_right(&mut self, buffer: &TextBuffer) -> bool {
        if self.col < buffer.line_length(self.row) {
            self.col += 1;
            true
        } else if self.row < buffer.last_row() {
            self.row += 1;
            self.col = 0;
            true
        } else {
            false
        }
    }

    /// Move to the previous line, keeping the column where it fits
    pub fn move_up(&mut self, buffer: &TextBuffer) -> bool {
        if self.row == 0 {
            return false;
        }
        self.row -= 1;
        self.col = self.col.min(buffer.line_length(self.row));
        true
    }

    /// Move to the next line, keeping the column where it fits
    pub fn move_down(&mut self, buffer: &TextBuffer) -> bool {
        if self.row >= buffer.last_row() {
            return false;
        }
        self.row += 1;
        self.col = self.col.min(buffer.line_length(self.row));
        true
    }
}
