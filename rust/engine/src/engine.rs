use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::Round;
use crate::player::{Player, PlayerStatus};

/// Minimum number of seated players needed to start a hand
pub const MIN_PLAYERS: usize = 2;

/// Largest table one deck can serve: a hand consumes `2N + 7` cards.
pub const MAX_PLAYERS: usize = 22;

/// Drives a single table through a hand, from hole cards to the river.
/// Owns the deck, the seated players, the community cards and the pot.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Engine;
/// use holdem_engine::game::Round;
///
/// let mut engine = Engine::new(Some(12345));
/// engine.add_player("Alice", 1000).unwrap();
/// engine.add_player("Bob", 1000).unwrap();
/// engine.start().unwrap();
///
/// engine.deal_flop().unwrap();
/// engine.deal_turn().unwrap();
/// engine.deal_river().unwrap();
///
/// assert_eq!(engine.current_round(), Some(Round::River));
/// assert_eq!(engine.community_cards().len(), 5);
/// assert_eq!(engine.deck_remaining(), 40);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The deck used for dealing cards
    deck: Deck,
    /// Seated players; insertion order is seating order
    players: Vec<Player>,
    /// Community cards on the board (0, 3, 4 or 5)
    community_cards: Vec<Card>,
    /// Chips collected for the current hand
    pot: u32,
    /// `None` until the first hand starts
    current_round: Option<Round>,
    /// Seat index of the dealer; tracked but not advanced
    dealer_position: usize,
    seed: Option<u64>,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let deck = match seed {
            Some(s) => Deck::new_with_seed(s),
            None => Deck::new(),
        };
        Self {
            deck,
            players: Vec::new(),
            community_cards: Vec::with_capacity(5),
            pot: 0,
            current_round: None,
            dealer_position: 0,
            seed,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_round(&self) -> Option<Round> {
        self.current_round
    }
    pub fn dealer_position(&self) -> usize {
        self.dealer_position
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// A hand is in progress from `new_hand` until the river is dealt.
    pub fn is_hand_in_progress(&self) -> bool {
        matches!(self.current_round, Some(r) if r != Round::River)
    }

    pub fn is_hand_complete(&self) -> bool {
        self.current_round == Some(Round::River)
    }

    pub fn add_player(&mut self, name: impl Into<String>, chips: u32) -> Result<(), GameError> {
        if self.is_hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TableFull { max: MAX_PLAYERS });
        }
        let player = Player::new(name, chips);
        debug!(name = player.name(), chips, seat = self.players.len(), "player seated");
        self.players.push(player);
        Ok(())
    }

    /// Starts a hand if enough players are seated.
    ///
    /// With fewer than two players nothing changes and
    /// [`GameError::InsufficientPlayers`] is returned so the caller can seat
    /// more players and retry.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.players.len() < MIN_PLAYERS {
            warn!(
                players = self.players.len(),
                "need at least {} players to start", MIN_PLAYERS
            );
            return Err(GameError::InsufficientPlayers {
                required: MIN_PLAYERS,
                actual: self.players.len(),
            });
        }
        info!(players = self.players.len(), "starting new hand");
        self.new_hand()
    }

    pub fn new_hand(&mut self) -> Result<(), GameError> {
        self.deck.reset();
        self.deck.shuffle();
        self.community_cards.clear();
        self.pot = 0;
        self.current_round = Some(Round::Preflop);
        for p in &mut self.players {
            p.reset();
        }
        self.deal_hole_cards()
    }

    // Two passes so every active seat gets its first card before anyone gets a second.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            for p in self.players.iter_mut().filter(|p| p.is_active()) {
                let c = self.deck.deal()?;
                p.receive_card(c);
            }
        }
        debug!(remaining = self.deck.remaining(), "hole cards dealt");
        Ok(())
    }

    pub fn deal_flop(&mut self) -> Result<(), GameError> {
        self.deal_community(Round::Flop)
    }

    pub fn deal_turn(&mut self) -> Result<(), GameError> {
        self.deal_community(Round::Turn)
    }

    pub fn deal_river(&mut self) -> Result<(), GameError> {
        self.deal_community(Round::River)
    }

    /// Performs whichever transition comes next and returns the new round.
    pub fn advance(&mut self) -> Result<Round, GameError> {
        let current = self.current_round.ok_or(GameError::NoHandInProgress)?;
        let next = current.next().ok_or(GameError::HandAlreadyComplete)?;
        self.deal_community(next)?;
        Ok(next)
    }

    fn deal_community(&mut self, to: Round) -> Result<(), GameError> {
        let from = self.current_round.ok_or(GameError::NoHandInProgress)?;
        let to = from.transition(to)?;
        let burned = self.deck.burn()?;
        for _ in 0..to.cards_dealt() {
            let c = self.deck.deal()?;
            self.community_cards.push(c);
        }
        self.current_round = Some(to);
        debug_assert_eq!(self.community_cards.len(), to.community_len());
        debug!(
            round = %to,
            burned = %burned,
            board = self.community_cards.len(),
            remaining = self.deck.remaining(),
            "community cards dealt"
        );
        Ok(())
    }

    /// Credits chips to the pot. Pass the value returned by
    /// [`Player::bet`], never the requested amount.
    pub fn add_to_pot(&mut self, amount: u32) {
        self.pot = self.pot.saturating_add(amount);
    }

    /// Read-only view of the table for presentation layers.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            round: self.current_round,
            pot: self.pot,
            dealer_position: self.dealer_position,
            community_cards: self.community_cards.iter().map(Card::to_string).collect(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name().to_string(),
                    chips: p.chips(),
                    current_bet: p.current_bet(),
                    status: p.status(),
                    hand: p.hand().iter().map(Card::to_string).collect(),
                })
                .collect(),
            deck_remaining: self.deck.remaining(),
        }
    }
}

/// Serializable table state with cards rendered as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub round: Option<Round>,
    pub pot: u32,
    pub dealer_position: usize,
    pub community_cards: Vec<String>,
    pub players: Vec<PlayerSnapshot>,
    pub deck_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub chips: u32,
    pub current_bet: u32,
    pub status: PlayerStatus,
    pub hand: Vec<String>,
}
