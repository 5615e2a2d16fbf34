use std::collections::HashMap;

use cozy_chess::{util::parse_uci_move, Board, Color, Move, Piece, Square};
use log::debug;

use crate::error::GameError;
use crate::material;
use crate::moves::{collect_legal_moves, has_check, has_legal_moves, is_capture, is_en_passant};
use crate::rules::Rules;

type RepetitionTable = HashMap<u64, u8, ahash::RandomState>;

/// Key for repetition counting. The en passant file only counts while the
/// capture is actually playable, so a double push with no enemy pawn beside
/// it repeats like any other position.
fn repetition_key(board: &Board) -> u64 {
    if board.en_passant().is_none() {
        return board.hash();
    }
    let can_capture = collect_legal_moves(board)
        .into_iter()
        .any(|mv| is_en_passant(board, mv));
    if can_capture {
        board.hash()
    } else {
        board.hash_without_ep()
    }
}

/// A game in progress: the current board plus everything needed to take
/// moves back and to detect repetitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
    repetitions: RepetitionTable,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Game {
    pub fn new(board: Board) -> Self {
        let mut repetitions = RepetitionTable::default();
        repetitions.insert(repetition_key(&board), 1);

        Self {
            board,
            history: Vec::new(),
            repetitions,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board = fen
            .parse::<Board>()
            .map_err(|e| GameError::InvalidFen(format!("{}: {:?}", fen, e)))?;
        Ok(Self::new(board))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies played since the game started.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Parse a move in UCI notation (`e2e4`, `e7e8q`, `e1g1`) against the current position.
    pub fn parse_move(&self, text: &str) -> Result<Move, GameError> {
        parse_uci_move(&self.board, text)
            .map_err(|e| GameError::InvalidMoveText(format!("{}: {:?}", text, e)))
    }

    /// Play a move that has not been checked for legality yet.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.board.is_legal(mv) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }
        self.apply(mv);
        Ok(())
    }

    /// Legal moves of the piece on `square`, if it belongs to the side to move.
    pub fn moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    #[inline]
    fn occurrences(&self) -> u8 {
        self.repetitions
            .get(&repetition_key(&self.board))
            .copied()
            .unwrap_or(0)
    }
}

impl Rules for Game {
    fn legal_moves(&self) -> Vec<Move> {
        collect_legal_moves(&self.board)
    }

    fn apply(&mut self, mv: Move) {
        let previous = self.board.clone();
        self.board.play(mv);
        self.history.push(previous);
        *self.repetitions.entry(repetition_key(&self.board)).or_insert(0) += 1;
    }

    fn undo(&mut self) {
        let previous = self
            .history
            .pop()
            .expect("undo called without a matching apply");

        let hash = repetition_key(&self.board);
        if let Some(count) = self.repetitions.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&hash);
            }
        } else {
            debug!("Repetition table missing entry for {:016x}", hash);
        }

        self.board = previous;
    }

    fn is_capture(&self, mv: Move) -> bool {
        is_capture(&self.board, mv)
    }

    fn is_check(&self) -> bool {
        has_check(&self.board)
    }

    fn is_checkmate(&self) -> bool {
        has_check(&self.board) && !has_legal_moves(&self.board)
    }

    fn is_stalemate(&self) -> bool {
        !has_check(&self.board) && !has_legal_moves(&self.board)
    }

    fn has_insufficient_material(&self) -> bool {
        material::has_insufficient_material(&self.board)
    }

    fn can_claim_threefold_repetition(&self) -> bool {
        self.occurrences() >= 3
    }

    fn can_claim_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((piece, color))
    }
}
