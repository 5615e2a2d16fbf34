use cozy_chess::{Color, Square};
use utils::Rules;

use crate::def::Evaluator;
use crate::piece_values::piece_value;
use crate::scores::Score;

/// Plain material count: own pieces add their value, enemy pieces subtract it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn name(&self) -> String {
        "Material".to_string()
    }

    fn evaluate(&self, rules: &dyn Rules, perspective: Color) -> Score {
        let mut score = 0;
        for square in Square::ALL {
            if let Some((piece, color)) = rules.piece_at(square) {
                let value = piece_value(piece);
                score += if color == perspective { value } else { -value };
            }
        }
        score
    }
}
