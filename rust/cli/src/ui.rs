//! UI helper functions for terminal output formatting.

use std::io::Write;

use holdem_engine::engine::Engine;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes the human-readable game state block: round, pot, board and one
/// line per seat.
pub fn write_game_state(out: &mut dyn Write, eng: &Engine) -> std::io::Result<()> {
    let round = eng
        .current_round()
        .map(|r| r.as_str())
        .unwrap_or("not started");
    let board: Vec<String> = eng.community_cards().iter().map(|c| c.to_string()).collect();

    writeln!(out, "--- Game State ---")?;
    writeln!(out, "Round: {}", round)?;
    writeln!(out, "Pot: {}", eng.pot())?;
    writeln!(out, "Community Cards: {}", board.join(" "))?;
    writeln!(out)?;
    writeln!(out, "Players:")?;
    for p in eng.players() {
        writeln!(out, "{}", p)?;
    }
    writeln!(out, "------------------")?;
    Ok(())
}
