mod error;
mod game;
mod material;
mod moves;
mod notation;
mod outcome;
mod rules;

pub use error::GameError;
pub use game::Game;
pub use material::has_insufficient_material;
pub use moves::{collect_legal_moves, has_check, is_capture, is_en_passant};
pub use notation::{move_to_uci, moves_to_uci};
pub use outcome::{classify, Outcome};
pub use rules::{Rules, Simulation};
