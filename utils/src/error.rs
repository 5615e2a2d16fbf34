use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("cannot read move: {0}")]
    InvalidMoveText(String),
}
