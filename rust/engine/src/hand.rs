use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Strength tier produced by [`evaluate_hand`].
///
/// This is a deliberately partial ladder: only value multiplicities are
/// recognised, so straights and flushes never appear and the numeric ranks
/// jump from 3 (Three of a Kind) to 6 (Full House). Equal tiers are exact ties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandRank {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    FullHouse = 6,
    FourOfAKind = 7,
}

impl HandRank {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a set of cards (hole cards plus board, seven at showdown) by how
/// often each value repeats. Suits are never inspected.
///
/// # Examples
///
/// ```
/// use holdem_duel_engine::cards::{Card, Rank, Suit};
/// use holdem_duel_engine::hand::{evaluate_hand, HandRank};
///
/// let cards = [
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Diamonds),
/// ];
/// let rank = evaluate_hand(&cards);
/// assert_eq!(rank, HandRank::Pair);
/// assert_eq!(rank.rank(), 1);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandRank {
    let counts = sorted_value_counts(cards);
    let largest = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    match (largest, second) {
        (4, _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 2) => HandRank::TwoPair,
        (2, _) => HandRank::Pair,
        _ => HandRank::HighCard,
    }
}

// Occurrence count of every value present, largest first.
fn sorted_value_counts(cards: &[Card]) -> Vec<u8> {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank as usize] += 1;
    }
    let mut counts: Vec<u8> = rank_counts.into_iter().filter(|&n| n > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}
