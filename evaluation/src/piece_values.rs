use cozy_chess::Piece;

pub const PAWN_VALUE: i32 = 1;
pub const KNIGHT_VALUE: i32 = 3;
pub const BISHOP_VALUE: i32 = 3;
pub const ROOK_VALUE: i32 = 5;
pub const QUEEN_VALUE: i32 = 9;
/// Larger than any material one side can hold without its king, so material
/// arithmetic never trades a king for pieces.
pub const KING_VALUE: i32 = 1000;

#[inline(always)]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_outweighs_any_army() {
        // Every pawn promoted to a queen, plus the original pieces.
        let largest_army = 9 * QUEEN_VALUE + 2 * ROOK_VALUE + 2 * BISHOP_VALUE + 2 * KNIGHT_VALUE;
        assert!(KING_VALUE > 2 * largest_army);
    }

    #[test]
    fn test_values() {
        let values: Vec<i32> = Piece::ALL.iter().map(|&p| piece_value(p)).collect();
        assert_eq!(values, vec![1, 3, 3, 5, 9, 1000]);
    }
}
