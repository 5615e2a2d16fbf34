use cozy_chess::{Board, Color, File, Piece, Rank, Square};

use super::commands::ConsoleOutput;

const HELP: &str = "\
Commands:
  <move>              play a move in UCI notation, e.g. e2e4, e7e8q, e1g1
  select <square>     list where the piece on <square> can go
  moves               list all legal moves
  board               show the board
  new                 start a new game
  options             show engine options
  set <name> <value>  change an engine option
  help                show this text
  quit                leave";

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, response: &ConsoleOutput) -> String {
        match response {
            ConsoleOutput::Welcome { human } => format!(
                "Welcome! You play {}. The engine will do its very best to lose.\nType 'help' for commands.",
                color_name(*human)
            ),
            ConsoleOutput::Board { board, last_move } => render_board(board, last_move.as_deref()),
            ConsoleOutput::EngineMove(mv) => format!("Engine plays {}", mv),
            ConsoleOutput::Targets { square, targets } => {
                format!("{} can move to: {}", square, targets.join(" "))
            }
            ConsoleOutput::Moves(moves) => format!("Legal moves: {}", moves.join(" ")),
            ConsoleOutput::GameOver(result) => format!(
                "Game over: {}.\nType 'new' to play again or 'quit' to leave.",
                result
            ),
            ConsoleOutput::Options(lines) => lines.join("\n"),
            ConsoleOutput::OptionSet { name, value } => format!("{} set to {}", name, value),
            ConsoleOutput::Help => HELP.to_string(),
            ConsoleOutput::Error(message) => format!("Error: {}", message),
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn piece_symbol(piece: Piece, color: Color) -> char {
    match (color, piece) {
        (Color::White, Piece::King) => '\u{2654}',
        (Color::White, Piece::Queen) => '\u{2655}',
        (Color::White, Piece::Rook) => '\u{2656}',
        (Color::White, Piece::Bishop) => '\u{2657}',
        (Color::White, Piece::Knight) => '\u{2658}',
        (Color::White, Piece::Pawn) => '\u{2659}',
        (Color::Black, Piece::King) => '\u{265A}',
        (Color::Black, Piece::Queen) => '\u{265B}',
        (Color::Black, Piece::Rook) => '\u{265C}',
        (Color::Black, Piece::Bishop) => '\u{265D}',
        (Color::Black, Piece::Knight) => '\u{265E}',
        (Color::Black, Piece::Pawn) => '\u{265F}',
    }
}

/// Rank 8 at the top, White's side at the bottom.
fn render_board(board: &Board, last_move: Option<&str>) -> String {
    let mut out = String::with_capacity(256);

    for &rank in Rank::ALL.iter().rev() {
        out.push_str(&format!("{} ", rank as usize + 1));
        for &file in File::ALL.iter() {
            let square = Square::new(file, rank);
            let symbol = match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => piece_symbol(piece, color),
                _ => '\u{00B7}',
            };
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");

    out.push_str(&format!("{} to move", color_name(board.side_to_move())));
    if let Some(mv) = last_move {
        out.push_str(&format!(", last move {}", mv));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_starting_position() {
        let text = Encoder.encode(&ConsoleOutput::Board {
            board: Board::default(),
            last_move: None,
        });
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[4], "4  · · · · · · · ·");
        assert_eq!(lines[7], "1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
        assert_eq!(lines[8], "   a b c d e f g h");
        assert_eq!(lines[9], "White to move");
    }

    #[test]
    fn test_render_last_move() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
            .parse()
            .unwrap();
        let text = Encoder.encode(&ConsoleOutput::Board {
            board,
            last_move: Some("e2e4".to_string()),
        });
        assert!(text.ends_with("Black to move, last move e2e4"));
    }

    #[test]
    fn test_game_over_offers_new_game() {
        let text = Encoder.encode(&ConsoleOutput::GameOver(
            "White wins by checkmate".to_string(),
        ));
        assert!(text.starts_with("Game over: White wins by checkmate."));
        assert!(text.contains("'new'"));
        assert!(text.contains("'quit'"));
    }

    #[test]
    fn test_simple_lines() {
        assert_eq!(
            Encoder.encode(&ConsoleOutput::EngineMove("e7e5".to_string())),
            "Engine plays e7e5"
        );
        assert_eq!(
            Encoder.encode(&ConsoleOutput::Targets {
                square: "g1".to_string(),
                targets: vec!["f3".to_string(), "h3".to_string()],
            }),
            "g1 can move to: f3 h3"
        );
        assert_eq!(
            Encoder.encode(&ConsoleOutput::Error("illegal move: e2e5".to_string())),
            "Error: illegal move: e2e5"
        );
    }
}
