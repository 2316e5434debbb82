//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use holdem_engine::game::Round;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Deal Texas Hold'em hands on a single simulated table"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seat players, start a hand and deal up to the requested round
    Deal {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Seat a player by name (repeat for each seat, in seating order)
        #[arg(long = "player", value_name = "NAME")]
        players: Vec<String>,
        /// Starting stack for every seat
        #[arg(long)]
        chips: Option<u32>,
        /// Last round to deal
        #[arg(long, default_value = "river")]
        to: Round,
        /// Print the table snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Append the dealt hand to a JSONL hand history file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
