//! Deal command handler.
//!
//! Seats the requested players, starts a hand and advances it round by round
//! up to the target, then prints the table state. The engine is only read
//! once the hand is dealt; nothing here mutates it for display.

use std::io::Write;
use std::path::PathBuf;

use holdem_engine::engine::Engine;
use holdem_engine::game::Round;
use holdem_engine::logger::HandLogger;
use tracing::debug;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

const DEFAULT_NAMES: [&str; 2] = ["Alice", "Bob"];

/// Arguments of `holdem deal` after parsing. `None` falls back to configuration.
#[derive(Debug, Clone)]
pub struct DealOptions {
    pub seed: Option<u64>,
    pub players: Vec<String>,
    pub chips: Option<u32>,
    pub to: Round,
    pub json: bool,
    pub log: Option<PathBuf>,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            seed: None,
            players: Vec::new(),
            chips: None,
            to: Round::River,
            json: false,
            log: None,
        }
    }
}

fn seat_names(opts: &DealOptions, cfg: &Config) -> Vec<String> {
    if !opts.players.is_empty() {
        return opts.players.clone();
    }
    (0..cfg.players)
        .map(|i| match DEFAULT_NAMES.get(i) {
            Some(name) => name.to_string(),
            None => format!("Player {}", i + 1),
        })
        .collect()
}

/// Handle the deal command.
///
/// Flags take precedence over configuration; an unseeded run draws a random
/// seed so the hand can still be logged and replayed.
pub fn handle_deal_command(opts: DealOptions, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    handle_deal_with_config(opts, &cfg, out)
}

pub(crate) fn handle_deal_with_config(
    opts: DealOptions,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let chips = opts.chips.unwrap_or(cfg.starting_stack);

    let mut eng = Engine::new(Some(seed));
    for name in seat_names(&opts, cfg) {
        if name.trim().is_empty() {
            return Err(CliError::InvalidInput("player name must not be empty".into()));
        }
        eng.add_player(name, chips)?;
    }
    eng.start()?;
    while eng.current_round().is_some_and(|r| r < opts.to) {
        eng.advance()?;
    }
    debug!(seed, round = ?eng.current_round(), "hand dealt");

    if let Some(path) = &opts.log {
        let mut logger = HandLogger::create(path)?;
        logger.record(&eng)?;
    }

    if opts.json {
        let json = serde_json::to_string_pretty(&eng.snapshot()).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        ui::write_game_state(out, &eng)?;
    }
    Ok(())
}
