//! Game rules: win detection.
//!
//! Draw detection is the trivial complement (board full, no win) and lives
//! on `Board::is_full`; the engine sequences the two checks.

pub mod win;

pub use win::check_win;
