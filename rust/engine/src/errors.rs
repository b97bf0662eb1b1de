use thiserror::Error;

/// Rejections raised by the engine. Every variant is recoverable: the action that
/// produced it has left the session exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient chips: {required} required, {available} available")]
    InsufficientChips { required: u32, available: u32 },
    #[error("Cannot {action} now: {reason}")]
    InvalidActionForState {
        action: &'static str,
        reason: &'static str,
    },
    #[error("Deck exhausted: {requested} requested, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid bet amount: {amount}")]
    InvalidBetAmount { amount: u32 },
    #[error("Invalid starting chips: {amount} (must be between 1 and {max})")]
    InvalidStartingChips { amount: u32, max: u32 },
    #[error("Unknown computer policy: {0}")]
    UnknownPolicy(String),
}
