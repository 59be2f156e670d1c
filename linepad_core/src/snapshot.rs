//! Editor snapshot for deterministic parity testing

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::Position;

/// Complete editor state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub cursor: Position,
    pub buffer_lines: Vec<String>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.cursor.row.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());

        for line in &self.buffer_lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        hasher.update(self.undo_depth.to_le_bytes());
        hasher.update(self.redo_depth.to_le_bytes());

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
