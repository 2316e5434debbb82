use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four dealing stages of a hand.
/// Order is strictly linear: preflop, flop, turn, river.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    /// Hole cards dealt, no community cards
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth and final community card
    River,
}

impl Round {
    /// Number of community cards on the board during this round.
    pub fn community_len(self) -> usize {
        match self {
            Round::Preflop => 0,
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River => 5,
        }
    }

    /// Community cards dealt on entering this round (after one burn).
    pub fn cards_dealt(self) -> usize {
        match self {
            Round::Preflop => 0,
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
        }
    }

    pub fn next(self) -> Option<Round> {
        match self {
            Round::Preflop => Some(Round::Flop),
            Round::Flop => Some(Round::Turn),
            Round::Turn => Some(Round::River),
            Round::River => None,
        }
    }

    /// Guarded transition: moving to `to` is legal only from its immediate
    /// predecessor.
    pub fn transition(self, to: Round) -> Result<Round, GameError> {
        match self.next() {
            Some(n) if n == to => Ok(to),
            None if to == Round::River => Err(GameError::HandAlreadyComplete),
            _ => Err(GameError::InvalidRoundTransition { from: self, to }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Round::Preflop => "preflop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Round {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preflop" => Ok(Round::Preflop),
            "flop" => Ok(Round::Flop),
            "turn" => Ok(Round::Turn),
            "river" => Ok(Round::River),
            other => Err(format!("unknown round {:?}", other)),
        }
    }
}
