mod def;
mod material;
pub mod piece_values;
pub mod scores;

pub use def::Evaluator;
pub use material::MaterialEvaluator;
pub use piece_values::piece_value;
pub use scores::Score;
