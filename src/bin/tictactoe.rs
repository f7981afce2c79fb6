//! Tic-tac-toe CLI - play one game against a random computer opponent

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    tictactoe::cli::play()?;
    Ok(())
}
