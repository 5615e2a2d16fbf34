use cozy_chess::{Board, Move, Piece};

/// Check if a move removes an enemy piece.
/// Castling is "king captures rook" in cozy-chess and is not a capture here;
/// en passant lands on an empty square but is one.
#[inline(always)]
pub fn is_capture(board: &Board, mv: Move) -> bool {
    if board.colors(!board.side_to_move()).has(mv.to) {
        return true;
    }
    is_en_passant(board, mv)
}

/// A pawn moving diagonally onto an empty square.
#[inline(always)]
pub fn is_en_passant(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::Pawn)
        && mv.from.file() != mv.to.file()
        && board.piece_on(mv.to).is_none()
}

/// Check if there are any legal moves in the position.
#[inline(always)]
pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// Collect all legal moves into a Vec, in generation order.
#[inline(always)]
pub fn collect_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

/// Check if the side to move is in check.
#[inline(always)]
pub fn has_check(board: &Board) -> bool {
    !board.checkers().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Square;

    fn mv(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[test]
    fn test_plain_capture() {
        let board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(is_capture(&board, mv(Square::E4, Square::D5)));
        assert!(!is_capture(&board, mv(Square::E4, Square::E5)));
    }

    #[test]
    fn test_en_passant_is_capture() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let ep = mv(Square::E5, Square::D6);
        assert!(is_en_passant(&board, ep));
        assert!(is_capture(&board, ep));
    }

    #[test]
    fn test_castling_is_not_capture() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let castle = mv(Square::E1, Square::H1);
        assert!(board.is_legal(castle));
        assert!(!is_capture(&board, castle));
    }

    #[test]
    fn test_no_legal_moves_when_mated() {
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        assert!(has_check(&board));
        assert!(!has_legal_moves(&board));
        assert!(collect_legal_moves(&board).is_empty());
    }
}
