use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Seat;

/// Betting round of a session. Rounds only ever move forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    /// Hole cards dealt, board hidden
    PreFlop,
    /// Three community cards visible
    Flop,
    /// Fourth community card visible
    Turn,
    /// All five community cards visible
    River,
    /// Hands compared
    Showdown,
}

impl Round {
    /// How many of the five community cards are visible in this round.
    pub fn cards_to_show(self) -> usize {
        match self {
            Round::PreFlop => 0,
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River | Round::Showdown => 5,
        }
    }

    /// The following round; `Showdown` is a fixed point.
    pub fn next(self) -> Round {
        match self {
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River | Round::Showdown => Round::Showdown,
        }
    }
}

/// Chip accounting for one session: both stacks, the pot, the amount the player
/// still owes, and the terminal flags.
///
/// Chips only ever move between a stack and the pot, so
/// `pot + player_chips + computer_chips` stays constant until a tied pot with
/// an odd chip is split (see [`BettingState::split_pot`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingState {
    pot: u32,
    current_bet: u32,
    player_chips: u32,
    computer_chips: u32,
    player_folded: bool,
    computer_folded: bool,
    game_over: bool,
}

impl BettingState {
    /// Both sides start with `starting_chips`. The engine only builds states whose
    /// stacks sum to at most `u32::MAX`, so awarding the pot cannot overflow.
    pub fn new(starting_chips: u32) -> Self {
        Self {
            pot: 0,
            current_bet: 0,
            player_chips: starting_chips,
            computer_chips: starting_chips,
            player_folded: false,
            computer_folded: false,
            game_over: false,
        }
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn player_chips(&self) -> u32 {
        self.player_chips
    }
    pub fn computer_chips(&self) -> u32 {
        self.computer_chips
    }
    pub fn player_folded(&self) -> bool {
        self.player_folded
    }
    pub fn computer_folded(&self) -> bool {
        self.computer_folded
    }
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn chips(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Player => self.player_chips,
            Seat::Computer => self.computer_chips,
        }
    }

    /// Chips on the table: both stacks plus the pot.
    pub fn total(&self) -> u64 {
        u64::from(self.pot) + u64::from(self.player_chips) + u64::from(self.computer_chips)
    }

    /// Moves `amount` from a stack into the pot.
    pub(crate) fn commit(&mut self, seat: Seat, amount: u32) -> Result<(), GameError> {
        let stack = match seat {
            Seat::Player => &mut self.player_chips,
            Seat::Computer => &mut self.computer_chips,
        };
        if amount > *stack {
            return Err(GameError::InsufficientChips {
                required: amount,
                available: *stack,
            });
        }
        *stack -= amount;
        self.pot += amount;
        Ok(())
    }

    pub(crate) fn set_current_bet(&mut self, amount: u32) {
        self.current_bet = amount;
    }

    /// Hands the whole pot to `seat` and returns the amount moved.
    pub(crate) fn award_pot(&mut self, seat: Seat) -> u32 {
        let pot = std::mem::take(&mut self.pot);
        match seat {
            Seat::Player => self.player_chips += pot,
            Seat::Computer => self.computer_chips += pot,
        }
        pot
    }

    /// Splits the pot evenly and returns `(each, remainder)`. Chips are whole
    /// units, so an odd pot leaves one chip that neither side receives; it is
    /// reported rather than silently dropped.
    pub(crate) fn split_pot(&mut self) -> (u32, u32) {
        let pot = std::mem::take(&mut self.pot);
        let each = pot / 2;
        self.player_chips += each;
        self.computer_chips += each;
        (each, pot % 2)
    }

    pub(crate) fn mark_player_folded(&mut self) {
        self.player_folded = true;
    }

    pub(crate) fn mark_computer_folded(&mut self) {
        self.computer_folded = true;
    }

    pub(crate) fn finish(&mut self) {
        self.current_bet = 0;
        self.game_over = true;
    }
}
