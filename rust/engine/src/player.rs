use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Per-hand state of a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Holding cards and able to bet
    Active,
    /// Folded; terminal until the next hand
    Folded,
    /// Whole stack committed; still holds cards but cannot bet further
    AllIn,
    /// Stack was empty when the hand started; dealt no cards
    Busted,
}

/// Default starting stack size for a seat in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seated player with their chip stack, hole cards and current-hand bet.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name; not required to be unique
    name: String,
    /// Chips behind (not yet committed this hand)
    chips: u32,
    /// Hole cards, in the order dealt
    hand: Vec<Card>,
    /// Chips committed during the current hand
    current_bet: u32,
    status: PlayerStatus,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Vec::with_capacity(2),
            current_bet: 0,
            status: Self::status_for_stack(chips),
        }
    }

    fn status_for_stack(chips: u32) -> PlayerStatus {
        if chips > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Busted
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// True while the player still holds a live hand (active or all-in).
    pub fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn has_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    /// True if the player may still put chips in this hand.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Commits up to `amount` chips and returns what was actually wagered.
    ///
    /// The amount is clamped to the stack, so a short stack goes all-in
    /// instead of overdrawing. Callers must credit the returned value, not
    /// the requested one.
    pub fn bet(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.chips);
        self.chips -= actual;
        self.current_bet += actual;
        if self.chips == 0 && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        actual
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Clears hand, bet and fold state for a new hand.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.status = Self::status_for_stack(self.chips);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.hand.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{} ({} chips): {}",
            self.name,
            self.chips,
            cards.join(", ")
        )
    }
}
