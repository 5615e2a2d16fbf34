//! UCI move notation helpers.
//!
//! cozy-chess uses "king captures rook" notation for castling internally (e.g., e1h1),
//! but players type and expect standard notation (e.g., e1g1).

use cozy_chess::{util::display_uci_move, Board, Move};

/// Convert a single move to UCI notation, handling castling correctly.
#[inline]
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    display_uci_move(board, mv).to_string()
}

/// Convert a list of moves, all legal in `board`, to UCI notation.
pub fn moves_to_uci(board: &Board, moves: &[Move]) -> Vec<String> {
    moves.iter().map(|&mv| move_to_uci(board, mv)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Square;

    #[test]
    fn test_castling_shown_as_king_move() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let castle = Move {
            from: Square::E1,
            to: Square::H1,
            promotion: None,
        };
        assert_eq!(move_to_uci(&board, castle), "e1g1");
    }

    #[test]
    fn test_promotion_suffix() {
        let board: Board = "7k/P7/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let promote = Move {
            from: Square::A7,
            to: Square::A8,
            promotion: Some(cozy_chess::Piece::Queen),
        };
        assert_eq!(moves_to_uci(&board, &[promote]), vec!["a7a8q".to_string()]);
    }
}
