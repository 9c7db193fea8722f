//! Game engine: the single mutation entry point.
//!
//! `GameEngine` exclusively owns one `GameState` and mutates it only
//! through `apply_move` and `reset`. Every transition replaces the state
//! wholesale with a fresh snapshot, so a consumer can hold the previous
//! snapshot and compare by value.
//!
//! ## Forgiving moves
//!
//! A click on an occupied cell or after the game is decided is a silent
//! no-op: the unchanged state is returned and nothing transitions. A
//! misdirected click must never crash the game. Out-of-range coordinates
//! are different: a correct rendering layer only emits clicks on real
//! cells, so those fail fast with `MoveError::OutOfRange`.

use thiserror::Error;

use crate::core::{GameState, GameStatus, Player, PlayerId, Pos, BOARD_SIZE};
use crate::rules;

/// Contract violation by the calling layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinates outside `[0, BOARD_SIZE)`.
    #[error("coordinates ({col}, {row}) are outside the {size}x{size} board")]
    OutOfRange { col: usize, row: usize, size: usize },
}

/// Two-player Gomoku state machine.
///
/// ```
/// use gomoku_core::{GameEngine, GameStatus, PlayerId};
///
/// let mut engine = GameEngine::new();
/// engine.apply_move(7, 7).unwrap();
///
/// let state = engine.state();
/// assert_eq!(state.board.stone_count(), 1);
/// assert_eq!(state.current_player, PlayerId::White);
/// assert_eq!(state.status, GameStatus::Ongoing);
/// ```
pub struct GameEngine {
    state: GameState,
    players: [Player; 2],
}

impl GameEngine {
    /// Engine with a fresh game and the default roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            players: Player::default_roster(),
        }
    }

    /// Engine with a fresh game and a custom roster.
    #[must_use]
    pub fn with_players(players: [Player; 2]) -> Self {
        Self {
            state: GameState::new(),
            players,
        }
    }

    /// Current snapshot, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Display roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Roster entry for one side.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Black => &self.players[0],
            PlayerId::White => &self.players[1],
        }
    }

    /// Place the current player's stone at `(col, row)`.
    ///
    /// Runs to completion before returning: board successor, win check
    /// from the placed stone, draw check, turn switch. Returns the updated
    /// snapshot, or the unchanged one for forgiving no-op cases (cell
    /// occupied, game already decided). The turn passes only when the game
    /// stays ongoing; on a win or draw `current_player` remains the mover.
    pub fn apply_move(&mut self, col: usize, row: usize) -> Result<&GameState, MoveError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(MoveError::OutOfRange {
                col,
                row,
                size: BOARD_SIZE,
            });
        }
        let pos = Pos::new(col as u8, row as u8);

        if self.state.status.is_over() || !self.state.board.is_empty(pos) {
            return Ok(&self.state);
        }

        let mover = self.state.current_player;
        let board = self.state.board.place(pos, mover);

        self.state = if let Some(line) = rules::check_win(&board, pos, mover) {
            GameState {
                board,
                current_player: mover,
                status: GameStatus::Won,
                winner: Some(mover),
                winning_line: Some(line),
            }
        } else if board.is_full() {
            GameState {
                board,
                current_player: mover,
                status: GameStatus::Draw,
                winner: None,
                winning_line: None,
            }
        } else {
            GameState {
                board,
                current_player: mover.opponent(),
                status: GameStatus::Ongoing,
                winner: None,
                winning_line: None,
            }
        };

        Ok(&self.state)
    }

    /// Replace the state with a fresh game. Never fails.
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new();
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
