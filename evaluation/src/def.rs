use cozy_chess::Color;
use utils::Rules;

use crate::scores::Score;

/// Static position evaluation.
pub trait Evaluator: Send {
    fn name(&self) -> String;
    /// Evaluate the position from `perspective`'s side. Positive = `perspective` is ahead.
    /// Must not mutate the position and must accept terminal positions.
    fn evaluate(&self, rules: &dyn Rules, perspective: Color) -> Score;
}
