use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// The human at the controls
    Player,
    /// The engine-driven opponent
    Computer,
}

/// Represents a table action. The human may request any of these; the
/// computer only ever answers with `Call` or `Fold`.
/// Amounts on `Bet` and `Raise` are the chips added on top of what is owed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Pass without betting (only when nothing is owed)
    Check,
    /// Open the betting with the given amount
    Bet(u32),
    /// Match the outstanding bet and move to the next round
    Call,
    /// Match the outstanding bet and add the given amount
    Raise(u32),
    /// Forfeit the pot
    Fold,
    /// Force the next round, leaving any bet outstanding
    NextRound,
}

impl PlayerAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Check => "check",
            PlayerAction::Bet(_) => "bet",
            PlayerAction::Call => "call",
            PlayerAction::Raise(_) => "raise",
            PlayerAction::Fold => "fold",
            PlayerAction::NextRound => "advance to the next round",
        }
    }
}

/// Default chips each side starts a session with
pub const STARTING_CHIPS: u32 = 100;

/// Default size of a bet or raise
pub const DEFAULT_BET: u32 = 10;

/// Largest starting stack; both stacks together must still fit in a `u32`.
pub const MAX_STARTING_CHIPS: u32 = u32::MAX / 2;

/// The two private cards dealt to one side. Fixed for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HoleCards(pub [Card; 2]);

impl HoleCards {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// Hole cards followed by the given board cards.
    pub fn with_board(&self, board: &[Card]) -> Vec<Card> {
        let mut all = Vec::with_capacity(2 + board.len());
        all.extend_from_slice(&self.0);
        all.extend_from_slice(board);
        all
    }
}
