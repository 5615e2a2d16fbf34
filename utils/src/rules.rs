// The rules boundary.
//
// Everything that knows about move legality, check and draw conditions sits
// behind `Rules`. Engines and the outcome classifier only ever talk to a
// position through this trait, which keeps them testable against scripted
// positions that real chess cannot produce.

use std::ops::Deref;

use cozy_chess::{Color, Move, Piece, Square};

pub trait Rules {
    /// All legal moves for the side to move. Order is stable while the position is unchanged.
    fn legal_moves(&self) -> Vec<Move>;

    /// Play a legal move. Must be balanced by exactly one `undo`.
    fn apply(&mut self, mv: Move);

    /// Take back the most recent `apply`.
    ///
    /// # Panics
    /// If there is no move to take back.
    fn undo(&mut self);

    /// True if `mv`, played from the current position, removes an enemy piece.
    fn is_capture(&self, mv: Move) -> bool;

    /// True if the side to move is in check.
    fn is_check(&self) -> bool;

    /// True if the side to move is in check and has no legal moves.
    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;
    fn has_insufficient_material(&self) -> bool;

    /// True once the current position has occurred three times.
    /// A repetition that the next move would complete does not count yet.
    fn can_claim_threefold_repetition(&self) -> bool;

    /// True once fifty moves by each side have passed without a pawn move or capture.
    /// Like repetition, only a draw that has already been reached is claimable.
    fn can_claim_fifty_move_draw(&self) -> bool;

    fn side_to_move(&self) -> Color;
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)>;
}

/// A move played for look-ahead only.
///
/// Holds the exclusive borrow of the position for its whole lifetime and
/// only hands out shared access, so nothing can play or take back moves
/// underneath it. The move is taken back when the guard is dropped.
pub struct Simulation<'a, R: Rules + ?Sized> {
    rules: &'a mut R,
}

impl<'a, R: Rules + ?Sized> Simulation<'a, R> {
    pub fn new(rules: &'a mut R, mv: Move) -> Self {
        rules.apply(mv);
        Self { rules }
    }
}

impl<R: Rules + ?Sized> Deref for Simulation<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules + ?Sized> Drop for Simulation<'_, R> {
    fn drop(&mut self) {
        self.rules.undo();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_simulation_restores_position() {
        let mut game = Game::default();
        let before = game.clone();
        let mv = game.legal_moves()[0];

        {
            let sim = Simulation::new(&mut game, mv);
            assert_eq!(sim.side_to_move(), Color::Black);
        }

        assert_eq!(game, before);
    }

    #[test]
    fn test_simulation_undoes_on_unwind() {
        let mut game = Game::default();
        let before = game.clone();
        let mv = game.legal_moves()[0];

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _sim = Simulation::new(&mut game, mv);
            panic!("look-ahead failed");
        }));

        assert!(result.is_err());
        assert_eq!(game, before);
    }
}
