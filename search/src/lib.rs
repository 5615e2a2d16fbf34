mod config;
mod def;
mod error;
mod options;
mod worst;

pub use config::{ConfigParam, EngineConfig};
pub use def::Engine;
pub use error::SearchError;
pub use options::{EngineOption, OptionType};
pub use worst::{MoveScore, Weights, WorstMoveEngine};
