//! Report whether the side to move is in check, checkmated or stalemated.
//!
//! Prints the status name and exits 0 (check), 1 (no_check), 2 (checkmate) or
//! 3 (stalemate). An unreadable FEN exits 4.

use std::process::ExitCode;

use clap::Parser;

use chess_rules::board::Board;

const BAD_INPUT: u8 = 4;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Position to inspect
    #[clap(value_name = "FEN")]
    fen: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(BAD_INPUT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let board = match Board::try_from_fen(&cli.fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("failed to parse FEN {:?}: {err}", cli.fen);
            return ExitCode::from(BAD_INPUT);
        }
    };

    let status = board.status();
    println!("{status}");
    ExitCode::from(status.exit_code())
}
