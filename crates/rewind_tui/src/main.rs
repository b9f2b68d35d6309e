//! Rewind - unified CLI.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, Command, logging, render, replay, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(Command::default_play) {
        Command::Play { config, reverse } => {
            let settings = tui::setup(&config, reverse)?;
            tui::run_tui(&settings)
        }
        Command::Replay {
            steps,
            reverse,
            json,
        } => {
            logging::init_stderr_logging("warn");
            let view = replay(&steps, reverse);
            print!("{}", render(&view, json)?);
            Ok(())
        }
    }
}
