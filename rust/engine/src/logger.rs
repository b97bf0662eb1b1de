use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Round;
use crate::hand::HandRank;
use crate::player::{HoleCards, PlayerAction, Seat};

/// Records a single table action.
/// The computer's answers are logged as `Call` or `Fold` under its own seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted
    pub seat: Seat,
    /// Round in which the action happened
    pub round: Round,
    /// The action taken
    pub action: PlayerAction,
    /// Pot after the action was applied
    pub pot_after: u32,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeReason {
    PlayerFolded,
    ComputerFolded,
    Showdown,
}

/// How the pot was settled. Hand ranks are only present when the hands were
/// actually compared.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Winning seat, or `None` for a split pot
    pub winner: Option<Seat>,
    pub reason: OutcomeReason,
    /// Pot size at resolution
    pub pot: u32,
    #[serde(default)]
    pub player_rank: Option<HandRank>,
    #[serde(default)]
    pub computer_rank: Option<HandRank>,
    /// Odd chip left over by an even split of an odd pot. Neither stack receives
    /// it, so it leaves the table and the session total drops by this amount.
    #[serde(default)]
    pub split_remainder: u32,
}

/// Complete record of one session: the seed it was shuffled with, every card
/// dealt, the action log and the result.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Seed of the shuffle, when the session was started from one
    pub seed: Option<u64>,
    /// Session start time (RFC3339)
    pub started_at: String,
    pub player_hole: HoleCards,
    pub computer_hole: HoleCards,
    /// All five community cards, regardless of how many were revealed
    pub board: Vec<Card>,
    /// Chronological list of actions
    pub actions: Vec<ActionRecord>,
    #[serde(default)]
    pub outcome: Option<Outcome>,
}

impl HandRecord {
    /// Serialises the record as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
