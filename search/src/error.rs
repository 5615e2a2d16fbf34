use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The position has no legal moves; the game is already over.
    #[error("no legal move available")]
    NoMoveAvailable,
}
