use cozy_chess::{BitBoard, Board, Color, Piece};

const LIGHT_SQUARES: BitBoard = BitBoard(0x55AA55AA55AA55AA);

/// Minor piece counts for one side, or `None` if it still has a pawn, rook or queen.
fn minor_counts(board: &Board, color: Color) -> Option<(u32, u32)> {
    let heavy = board.colored_pieces(color, Piece::Pawn)
        | board.colored_pieces(color, Piece::Rook)
        | board.colored_pieces(color, Piece::Queen);
    if !heavy.is_empty() {
        return None;
    }

    let knights = board.colored_pieces(color, Piece::Knight).len();
    let bishops = board.colored_pieces(color, Piece::Bishop).len();
    Some((knights, bishops))
}

/// Check if neither side can ever deliver checkmate.
///
/// Dead drawn positions:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - K+B vs K+B with same-colored bishops
pub fn has_insufficient_material(board: &Board) -> bool {
    let (Some(white), Some(black)) = (
        minor_counts(board, Color::White),
        minor_counts(board, Color::Black),
    ) else {
        return false;
    };

    match (white, black) {
        ((0, 0), (0, 0)) => true,
        ((1, 0), (0, 0)) | ((0, 0), (1, 0)) => true,
        ((0, 1), (0, 0)) | ((0, 0), (0, 1)) => true,
        ((0, 1), (0, 1)) => {
            let bishops = board.pieces(Piece::Bishop);
            let white_on_light = !(bishops & board.colors(Color::White) & LIGHT_SQUARES).is_empty();
            let black_on_light = !(bishops & board.colors(Color::Black) & LIGHT_SQUARES).is_empty();
            white_on_light == black_on_light
        }
        _ => false,
    }
}
