//! Win detection from the last placed stone.
//!
//! A win can only newly appear through the latest stone, so only the four
//! line directions through that stone are scanned: O(WIN_LENGTH) per
//! direction instead of a full-board sweep.

use smallvec::smallvec;

use crate::core::{Board, PlayerId, Pos, WinningLine, WIN_LENGTH};

/// Direction vectors for line checking (4 directions).
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Check whether the stone just placed at `pos` completes a line.
///
/// For each direction, counts the placed stone plus contiguous same-player
/// stones extending both ways. The first direction reaching `WIN_LENGTH`
/// wins; its positions are returned in board order. A single move can
/// complete at most one winning outcome, so scanning stops there.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, player: PlayerId) -> Option<WinningLine> {
    for &(dc, dr) in &DIRECTIONS {
        let mut line: WinningLine = smallvec![pos];

        // Extend in the negative direction first to keep board order
        let mut c = pos.col as i32 - dc;
        let mut r = pos.row as i32 - dr;
        while Pos::in_bounds(c, r) && board.get(Pos::new(c as u8, r as u8)) == Some(player) {
            line.insert(0, Pos::new(c as u8, r as u8));
            c -= dc;
            r -= dr;
        }

        // Then the positive direction
        c = pos.col as i32 + dc;
        r = pos.row as i32 + dr;
        while Pos::in_bounds(c, r) && board.get(Pos::new(c as u8, r as u8)) == Some(player) {
            line.push(Pos::new(c as u8, r as u8));
            c += dc;
            r += dr;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(board: &Board, stones: &[(u8, u8)], player: PlayerId) -> Board {
        stones
            .iter()
            .fold(board.clone(), |b, &(c, r)| b.place(Pos::new(c, r), player))
    }

    #[test]
    fn test_horizontal_five() {
        let board = line(&Board::new(), &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], PlayerId::Black);
        let won = check_win(&board, Pos::new(4, 9), PlayerId::Black).unwrap();
        assert_eq!(won.len(), 5);
        assert_eq!(won[0], Pos::new(0, 9));
        assert_eq!(won[4], Pos::new(4, 9));
    }

    #[test]
    fn test_vertical_five() {
        let board = line(&Board::new(), &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)], PlayerId::White);
        assert!(check_win(&board, Pos::new(9, 2), PlayerId::White).is_some());
    }

    #[test]
    fn test_diagonal_se_five() {
        let board = line(&Board::new(), &[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], PlayerId::Black);
        assert!(check_win(&board, Pos::new(7, 7), PlayerId::Black).is_some());
    }

    #[test]
    fn test_diagonal_ne_five() {
        let board = line(&Board::new(), &[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], PlayerId::White);
        assert!(check_win(&board, Pos::new(6, 6), PlayerId::White).is_some());
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = line(&Board::new(), &[(0, 0), (1, 0), (2, 0), (3, 0)], PlayerId::Black);
        assert!(check_win(&board, Pos::new(3, 0), PlayerId::Black).is_none());
    }

    #[test]
    fn test_overline_wins() {
        let board = line(
            &Board::new(),
            &[(2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5)],
            PlayerId::Black,
        );
        let won = check_win(&board, Pos::new(4, 5), PlayerId::Black).unwrap();
        assert_eq!(won.len(), 6);
    }

    #[test]
    fn test_completed_from_the_middle() {
        // Two stones either side, win completed by the center stone
        let board = line(&Board::new(), &[(5, 5), (6, 5), (8, 5), (9, 5)], PlayerId::Black);
        assert!(check_win(&board, Pos::new(6, 5), PlayerId::Black).is_none());

        let board = board.place(Pos::new(7, 5), PlayerId::Black);
        let won = check_win(&board, Pos::new(7, 5), PlayerId::Black).unwrap();
        assert_eq!(won[0], Pos::new(5, 5));
        assert_eq!(won[4], Pos::new(9, 5));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let board = line(&Board::new(), &[(0, 0), (1, 0), (3, 0), (4, 0)], PlayerId::Black)
            .place(Pos::new(2, 0), PlayerId::White);
        let board = board.place(Pos::new(5, 0), PlayerId::Black);
        assert!(check_win(&board, Pos::new(5, 0), PlayerId::Black).is_none());
    }

    #[test]
    fn test_five_at_board_edge() {
        let board = line(
            &Board::new(),
            &[(10, 14), (11, 14), (12, 14), (13, 14), (14, 14)],
            PlayerId::Black,
        );
        assert!(check_win(&board, Pos::new(14, 14), PlayerId::Black).is_some());
    }

    #[test]
    fn test_five_at_corner_diagonal() {
        let board = line(
            &Board::new(),
            &[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)],
            PlayerId::White,
        );
        assert!(check_win(&board, Pos::new(10, 10), PlayerId::White).is_some());
    }
}
