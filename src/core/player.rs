//! Player identification and display metadata.
//!
//! ## PlayerId
//!
//! The two stone colors. Exactly two players exist per game and they
//! alternate strictly; `opponent()` gives the other side.
//!
//! ## Player
//!
//! Display roster entry (name, color) consumed by rendering layers.
//! Carries no game logic.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
///
/// Serializes as `"black"` / `"white"` for frontend consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Black,
    White,
}

impl PlayerId {
    /// The other side.
    ///
    /// ```
    /// use gomoku_core::PlayerId;
    ///
    /// assert_eq!(PlayerId::Black.opponent(), PlayerId::White);
    /// assert_eq!(PlayerId::White.opponent(), PlayerId::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Black => PlayerId::White,
            PlayerId::White => PlayerId::Black,
        }
    }

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerId::Black => "black",
            PlayerId::White => "white",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one player.
///
/// The engine holds a fixed roster of two; rendering layers read it to
/// label turns and announce the winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
}

impl Player {
    /// Default two-player roster: "Player 1" on black, "Player 2" on white.
    #[must_use]
    pub fn default_roster() -> [Player; 2] {
        [
            Player {
                id: PlayerId::Black,
                name: "Player 1".to_string(),
                color: "black".to_string(),
            },
            Player {
                id: PlayerId::White,
                name: "Player 2".to_string(),
                color: "white".to_string(),
            },
        ]
    }
}
