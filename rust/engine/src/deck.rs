use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Ordered 52-card deck with its own RNG stream.
///
/// Cards are dealt from the head of the sequence. A seeded deck produces the
/// same shuffle order every time, which keeps hands reproducible.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.shuffle();
/// let card = deck.deal().expect("fresh deck has cards");
/// assert_eq!(deck.remaining(), 51);
/// println!("dealt {}", card);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_os_rng())
    }

    fn with_rng(rng: ChaCha20Rng) -> Self {
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Restores the canonical order and puts every dealt card back.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Permutes the undealt cards in place. Dealt cards stay dealt.
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        let c = *self.cards.get(self.position).ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        Ok(c)
    }

    /// Deals one card face down; the card is returned only for auditing.
    pub fn burn(&mut self) -> Result<Card, GameError> {
        self.deal()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Undealt cards, head first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
