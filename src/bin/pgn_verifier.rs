//! Replay a numbered move list from stdin and compare the final position.
//!
//! Exit codes: 0 when the final FEN matches, 1 when a FEN argument or a move
//! cannot be parsed or played, 2 when the final FEN differs from the expected one.

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use chess_rules::board::Board;
use chess_rules::game::Game;

const MISMATCH: u8 = 2;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Position the moves start from
    #[clap(value_name = "START_FEN")]
    start: String,
    /// Position the moves must lead to
    #[clap(value_name = "EXPECTED_FEN")]
    expected: String,
}

enum Outcome {
    Match,
    Mismatch { expected: String, actual: String },
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let start = Board::try_from_fen(&cli.start).context("invalid start FEN")?;
    let expected = Board::try_from_fen(&cli.expected).context("invalid expected FEN")?;

    let mut fragment = String::new();
    std::io::stdin()
        .read_to_string(&mut fragment)
        .context("reading moves from stdin")?;

    let game = Game::from_fragment(start, &fragment)?;
    debug!("replayed {} plies", game.plies().len());

    let actual = game.current().to_fen();
    let expected = expected.to_fen();
    if actual == expected {
        Ok(Outcome::Match)
    } else {
        Ok(Outcome::Mismatch { expected, actual })
    }
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
        Ok(Outcome::Match) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch { expected, actual }) => {
            eprintln!("expected: {expected}");
            eprintln!("actual:   {actual}");
            ExitCode::from(MISMATCH)
        }
        Err(err) => {
            eprintln!("FAILED: {err:#}");
            ExitCode::FAILURE
        }
    }
}
