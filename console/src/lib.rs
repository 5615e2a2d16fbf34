mod connection;
mod decoder;
mod encoder;

pub mod commands;

pub use commands::{ConsoleInput, ConsoleOutput};
pub use connection::ConsoleConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
