//! Chess board representation and rules.
//!
//! A mailbox of 64 optional pieces with the rest of the FEN state alongside.
//! Supports the full rules of movement including castling, en passant and
//! promotion, plus check, checkmate and stalemate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! board.play_san("e4").unwrap();
//! assert_eq!(board.generate_moves().len(), 20);
//! assert_eq!(board.status(), GameStatus::NoCheck);
//! ```

mod access;
mod attack_tables;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use access::AccessMap;
pub use error::{FenError, IllegalMoveError, RulesError, SanError, SquareError};
pub use fen::STARTING_FEN;
pub use state::{Board, Occupant};
pub use status::GameStatus;
pub use types::{CastleSide, CastlingRights, Color, Counter, Move, MoveKind, Piece, Square};

pub(crate) use types::{file_from_char, rank_from_char, PROMOTION_PIECES};
