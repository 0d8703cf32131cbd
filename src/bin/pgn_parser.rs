//! Replay a numbered move list from stdin and print the last move as JSON.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use chess_rules::board::Board;
use chess_rules::game::Game;
use chess_rules::report::MoveReport;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Start from this FEN instead of the initial position
    #[clap(long, value_name = "FEN")]
    fen: Option<String>,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let start = match &cli.fen {
        Some(fen) => Board::try_from_fen(fen).context("invalid --fen")?,
        None => Board::new(),
    };

    let mut fragment = String::new();
    std::io::stdin()
        .read_to_string(&mut fragment)
        .context("reading moves from stdin")?;

    let game = Game::from_fragment(start, &fragment)?;
    let Some(last) = game.last() else {
        bail!("no moves in input");
    };
    serde_json::to_string_pretty(&MoveReport::new(last)).context("serializing move")
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("FAILED: {err:#}");
            ExitCode::FAILURE
        }
    }
}
