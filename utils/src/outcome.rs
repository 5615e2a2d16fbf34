use std::fmt;

use cozy_chess::Color;

use crate::rules::Rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    CheckmateWhiteWins,
    CheckmateBlackWins,
    StalemateDraw,
    InsufficientMaterialDraw,
    ThreefoldRepetitionDraw,
    FiftyMoveDraw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::CheckmateWhiteWins => Some(Color::White),
            Outcome::CheckmateBlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Ongoing => "Game in progress",
            Outcome::CheckmateWhiteWins => "White wins by checkmate",
            Outcome::CheckmateBlackWins => "Black wins by checkmate",
            Outcome::StalemateDraw => "Draw by stalemate",
            Outcome::InsufficientMaterialDraw => "Draw by insufficient material",
            Outcome::ThreefoldRepetitionDraw => "Draw by threefold repetition",
            Outcome::FiftyMoveDraw => "Draw by the fifty-move rule",
        };
        f.write_str(text)
    }
}

/// Classify the current position.
///
/// Checkmate is tested first: it ends the game outright, while repetition and
/// the fifty-move rule are only claimable.
pub fn classify<R: Rules + ?Sized>(rules: &R) -> Outcome {
    if rules.is_checkmate() {
        // The side to move is the one that got mated.
        return match rules.side_to_move() {
            Color::White => Outcome::CheckmateBlackWins,
            Color::Black => Outcome::CheckmateWhiteWins,
        };
    }
    if rules.is_stalemate() {
        return Outcome::StalemateDraw;
    }
    if rules.has_insufficient_material() {
        return Outcome::InsufficientMaterialDraw;
    }
    if rules.can_claim_threefold_repetition() {
        return Outcome::ThreefoldRepetitionDraw;
    }
    if rules.can_claim_fifty_move_draw() {
        return Outcome::FiftyMoveDraw;
    }
    Outcome::Ongoing
}
