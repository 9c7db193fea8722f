//! Core state types: board, players, game snapshot.
//!
//! Everything here is a plain value type; the rules live in `crate::rules`
//! and the mutation entry point is `crate::engine::GameEngine`.

pub mod board;
pub mod player;
pub mod state;

pub use board::{Board, Cell, Pos, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
pub use player::{Player, PlayerId};
pub use state::{GameState, GameStatus, WinningLine};
