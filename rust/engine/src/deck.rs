use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of the uniform indices consumed by [`Deck::shuffle`].
///
/// The engine never reaches for an ambient RNG; everything random flows through
/// an implementation of this trait so a session can be replayed from its seed or
/// driven by a scripted source in tests.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

/// ChaCha20-backed [`RandomSource`] that remembers the seed it was built from.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed from the thread RNG so the session can still be replayed.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// A single session's deck. Cards leave from the tail and never come back.
///
/// # Examples
///
/// ```
/// use holdem_duel_engine::deck::{Deck, SeededRandom};
///
/// let mut deck = Deck::new();
/// deck.shuffle(&mut SeededRandom::new(42));
/// let hole = deck.deal(2).expect("fresh deck has cards");
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// assert_eq!(deck.drawn(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck in canonical order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// In-place Fisher–Yates pass: i runs from the last index down to 1 and swaps
    /// with a uniform j in `0..=i`.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, source: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = source.index_up_to(i);
            self.cards.swap(i, j);
        }
    }

    /// Removes the last `n` cards, returned in the order they came off the deck
    /// (tail card first). Fails without touching the deck when fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn drawn(&self) -> usize {
        52 - self.cards.len()
    }

    /// Remaining cards in storage order; the last element is drawn next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
