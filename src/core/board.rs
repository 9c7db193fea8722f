//! Board representation.
//!
//! The board is a flat, row-major `im::Vector` of cells. `place` returns a
//! NEW board sharing structure with the old one, so every `GameState` holds
//! an independent snapshot and consumers can detect changes by value
//! comparison. Cloning is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Board dimension (15x15).
pub const BOARD_SIZE: usize = 15;
/// Total number of intersections.
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Contiguous stones required to win.
pub const WIN_LENGTH: usize = 5;

/// One intersection: empty or owned by a player.
pub type Cell = Option<PlayerId>;

/// Position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    #[must_use]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!((col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE);
        Self { col, row }
    }

    #[inline]
    #[must_use]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    #[must_use]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    /// Whether signed coordinates fall on the board.
    #[inline]
    #[must_use]
    pub fn in_bounds(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Fixed 15x15 grid of cells.
///
/// Persistent: `place` never mutates, it produces the successor board.
/// A set cell never reverts to empty within one board's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Cell>,
    stones: usize,
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::iter::repeat(None).take(TOTAL_CELLS).collect(),
            stones: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Cell at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Whether a position holds no stone.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Successor board with `player`'s stone at `pos`.
    ///
    /// The receiver is left untouched. `pos` must be empty.
    #[must_use]
    pub fn place(&self, pos: Pos, player: PlayerId) -> Board {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        let mut next = self.clone();
        next.cells.set(pos.to_index(), Some(player));
        next.stones += 1;
        next
    }

    /// Total stones on the board.
    #[inline]
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Whether every intersection is occupied (the draw condition).
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.stones == TOTAL_CELLS
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Row-major rows view for rendering layers.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..BOARD_SIZE).map(move |row| {
            (0..BOARD_SIZE)
                .map(move |col| self.get(Pos::new(col as u8, row as u8)))
                .collect()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
