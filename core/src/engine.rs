use evaluation::MaterialEvaluator;
use search::{Engine, EngineConfig, WorstMoveEngine};

pub fn create(config: &EngineConfig) -> WorstMoveEngine {
    WorstMoveEngine::new(Box::new(MaterialEvaluator), config)
}
