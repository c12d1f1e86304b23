use thiserror::Error;

#[derive(Debug, Error)]
pub enum BingoError {
    /// A card needs 24 distinct items and the park's pool is smaller.
    /// Checked before any sampling, so a caller never sees a partial card.
    #[error("park '{park_id}' has {available} of the {required} items needed for a bingo card")]
    InsufficientItems {
        park_id: String,
        available: usize,
        required: usize,
    },

    #[error("no active card to update")]
    NoActiveCard,

    #[error("square ({row}, {col}) is outside the 5x5 grid")]
    PositionOutOfBounds { row: usize, col: usize },

    #[error("storage error: {0}")]
    Storage(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BingoError>;
