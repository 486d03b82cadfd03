//! Edge cursor - selects one of the cells just outside the board.
//!
//! The `4 * grid_size` edge cells form a ring, walked clockwise:
//! top row (`row == -1`) left to right, right column (`col == n`) top to
//! bottom, bottom row (`row == n`) right to left, left column (`col == -1`)
//! bottom to top. Corners are not part of the ring since a push from a
//! corner has no row or column to travel along.

use crate::types::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCursor {
    grid_size: i8,
    pos: u16,
}

impl EdgeCursor {
    /// Cursor above the middle column.
    pub fn new(mode: Mode) -> Self {
        let n = mode.config().grid_size;
        Self {
            grid_size: n,
            pos: (n / 2) as u16,
        }
    }

    /// Number of cells on the ring.
    pub fn len(&self) -> u16 {
        4 * self.grid_size as u16
    }

    pub fn is_empty(&self) -> bool {
        self.grid_size == 0
    }

    pub fn next(&mut self) {
        self.pos = (self.pos + 1) % self.len();
    }

    pub fn prev(&mut self) {
        self.pos = (self.pos + self.len() - 1) % self.len();
    }

    /// Adopt another mode's geometry, keeping the side and clamping the
    /// offset along it.
    pub fn set_mode(&mut self, mode: Mode) {
        let old = self.grid_size as u16;
        let n = mode.config().grid_size;
        let side = self.pos / old;
        let offset = (self.pos % old).min(n as u16 - 1);
        self.grid_size = n;
        self.pos = side * n as u16 + offset;
    }

    /// The `(row, col)` click cell under the cursor.
    pub fn cell(&self) -> (i8, i8) {
        let n = self.grid_size;
        let side = self.pos / n as u16;
        let i = (self.pos % n as u16) as i8;
        match side {
            0 => (-1, i),
            1 => (i, n),
            2 => (n, n - 1 - i),
            _ => (n - 1 - i, -1),
        }
    }
}
