//! Print, for every square, which pieces of the side to move can legally reach it.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use chess_rules::board::Board;
use chess_rules::report::AccessReport;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Position to map
    #[clap(value_name = "FEN")]
    fen: String,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let board = Board::try_from_fen(&cli.fen).context("failed to parse FEN")?;
    let report = AccessReport::new(&board, &board.access_map());
    serde_json::to_string_pretty(&report).context("serializing access map")
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
