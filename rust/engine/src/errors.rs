use thiserror::Error;

use crate::game::Round;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Need at least {required} players to start, have {actual}")]
    InsufficientPlayers { required: usize, actual: usize },
    #[error("Cannot move from {from} to {to}")]
    InvalidRoundTransition { from: Round, to: Round },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Cannot change seats while a hand is in progress")]
    HandInProgress,
    #[error("Table is full ({max} players)")]
    TableFull { max: usize },
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}
