use crate::{EngineConfig, SearchError};
use cozy_chess::Move;
use evaluation::Evaluator;
use utils::Rules;

pub trait Engine {
    fn new(evaluator: Box<dyn Evaluator>, config: &EngineConfig) -> Self
    where
        Self: Sized;
    fn configure(&mut self, config: &EngineConfig);
    /// Pick a move for the side to move. The position is left exactly as it was given.
    fn choose_move<R: Rules>(&mut self, rules: &mut R) -> Result<Move, SearchError>;
    fn name(&self) -> String;
}
