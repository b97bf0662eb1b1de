#![allow(dead_code)]

use holdem_duel_engine::cards::{full_deck, Card, Rank, Suit};
use holdem_duel_engine::deck::RandomSource;

/// Replays a fixed list of picks, then stops swapping. Every requested upper
/// bound is kept so tests can check how the shuffle walked the deck.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    next: usize,
    pub bounds: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(picks: Vec<usize>) -> Self {
        Self {
            picks,
            next: 0,
            bounds: Vec::new(),
        }
    }

    /// Leaves the deck in canonical order.
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }

    /// Stacks the deck so the deal hands out, in order: player hole cards
    /// (2), computer hole cards (2), then the five community cards.
    ///
    /// Each card must sit below canonical index 43 so the first nine swaps
    /// pull it straight from its home slot.
    pub fn stacked(deal: [Card; 9]) -> Self {
        let canonical = full_deck();
        let picks = deal
            .iter()
            .map(|c| {
                let idx = canonical
                    .iter()
                    .position(|d| d == c)
                    .expect("card is in the deck");
                assert!(idx < 43, "{c} cannot be stacked from index {idx}");
                idx
            })
            .collect();
        Self::new(picks)
    }
}

impl RandomSource for ScriptedSource {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.bounds.push(upper);
        let pick = self.picks.get(self.next).copied().unwrap_or(upper);
        self.next += 1;
        pick
    }
}

pub fn c(r: Rank, s: Suit) -> Card {
    Card::new(r, s)
}
