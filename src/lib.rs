//! # gomoku-core
//!
//! A two-player Gomoku (five-in-a-row) game state engine.
//!
//! ## Design Principles
//!
//! 1. **Engine-Only**: No rendering, input handling, or styling. Frontends
//!    read snapshots and invoke the two operations; all game logic is here.
//!
//! 2. **Value Snapshots**: Every transition replaces the whole `GameState`.
//!    Persistent data structures (`im`) make the successor board an O(1)
//!    structural copy, so consumers detect changes with a plain `!=`.
//!
//! 3. **Forgiving Input**: Clicks on occupied cells or after the game is
//!    decided are silent no-ops. Only out-of-range coordinates, which a
//!    correct frontend never produces, surface as errors.
//!
//! ## Modules
//!
//! - `core`: board, players, game snapshot
//! - `rules`: win detection from the last placed stone
//! - `engine`: `GameEngine`, the single mutation entry point

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameState, GameStatus, Player, PlayerId, Pos, WinningLine, BOARD_SIZE,
    TOTAL_CELLS, WIN_LENGTH,
};
pub use crate::engine::{GameEngine, MoveError};
