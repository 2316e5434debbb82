//! Command handler modules for the holdem CLI.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`.

pub mod cfg;
pub mod deal;

pub use cfg::handle_cfg_command;
pub use deal::{DealOptions, handle_deal_command};
