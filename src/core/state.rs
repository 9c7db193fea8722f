//! Game state: the value snapshot handed to rendering layers.
//!
//! ## GameStatus
//!
//! `Ongoing` / `Won` / `Draw`, mutually exclusive and monotonic within a
//! game: once the game is decided only `GameEngine::reset` produces an
//! `Ongoing` state again.
//!
//! ## GameState
//!
//! Aggregate of board, side to move, status and winner. Replaced wholesale
//! on every transition (never mutated in place), so two snapshots compare
//! by value and change detection is a single `!=`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Pos, WIN_LENGTH};
use super::player::PlayerId;

/// Lifecycle of a single game.
///
/// Serializes as `"ongoing"` / `"won"` / `"draw"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Won,
    Draw,
}

impl GameStatus {
    /// Whether the game is decided (no further moves accepted).
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Positions of a completed winning line, in board order.
///
/// Inline storage for the common exactly-five case; overlines spill.
pub type WinningLine = SmallVec<[Pos; WIN_LENGTH]>;

/// One full game snapshot.
///
/// `winner` and `winning_line` are `Some` exactly when `status` is `Won`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: PlayerId,
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    pub winning_line: Option<WinningLine>,
}

impl GameState {
    /// Fresh game: empty board, Black to move, no winner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: PlayerId::Black,
            status: GameStatus::Ongoing,
            winner: None,
            winning_line: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
