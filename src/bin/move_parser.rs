//! Resolve algebraic move tokens in order and print them as a JSON array.
//!
//! Exits 0 on success and 1 if any token cannot be parsed or played, in which
//! case nothing is written to stdout.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;

use chess_rules::board::Board;
use chess_rules::game::{Game, Ply};
use chess_rules::report::MoveReport;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Start from this FEN instead of the initial position
    #[clap(long, value_name = "FEN")]
    fen: Option<String>,
    /// Print every intermediate board to stderr
    #[clap(long)]
    print: bool,
    /// Moves in algebraic notation, e.g. `e4 e5 Nf3`
    #[clap(value_name = "MOVE")]
    moves: Vec<String>,
}

fn print_ply(ply: &Ply) {
    eprintln!();
    eprintln!("{}", ply.san);
    eprintln!("{} -> {}", ply.mv.from(), ply.mv.to());
    eprintln!("{} moved", ply.mv.color());
    eprintln!("{}", ply.board);
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let start = match &cli.fen {
        Some(fen) => Board::try_from_fen(fen).context("invalid --fen")?,
        None => Board::new(),
    };
    if cli.print {
        eprintln!("{start}");
    }

    let mut game = Game::new(start);
    for (index, token) in cli.moves.iter().enumerate() {
        let ply = game
            .play(token)
            .with_context(|| format!("move {} ({token:?}) failed", index + 1))?;
        if cli.print {
            print_ply(ply);
        }
    }
    info!("parsed {} moves", game.plies().len());

    let reports: Vec<MoveReport> = game.plies().iter().map(MoveReport::new).collect();
    serde_json::to_string_pretty(&reports).context("serializing moves")
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
