use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Deck exhausted: no cards remaining")]
    DeckExhausted,
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Insufficient balance: bet {bet}, balance {balance}")]
    InsufficientBalance { bet: u64, balance: u64 },
}

/// Coarse classification of a [`GameError`], one per row family of the error table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ExhaustedResource,
    InsufficientResource,
    InsufficientBalance,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GameError::DeckExhausted => ErrorKind::ExhaustedResource,
            GameError::InsufficientCards { .. } => ErrorKind::InsufficientResource,
            GameError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
        }
    }
}
