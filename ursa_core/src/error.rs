use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many bombs")]
    TooManyBombs,
    #[error("Bet must be positive and no larger than the balance")]
    InvalidBet,
    #[error("Bets are locked once a cell has been revealed")]
    BetLocked,
    #[error("Insufficient funds to start a round")]
    InsufficientFunds,
    #[error("No active round")]
    RoundNotActive,
}

pub type Result<T> = core::result::Result<T, GameError>;
