//! Chess rules engine: FEN positions, algebraic move notation, full move
//! legality, and check/checkmate/stalemate detection.
//!
//! # Example
//! ```
//! use chess_rules::{Board, Game, GameStatus};
//!
//! let game = Game::from_fragment(Board::new(), "1.f3 e5 2.g4 Qh4#").unwrap();
//! assert_eq!(game.current().status(), GameStatus::Checkmate);
//! ```

pub mod board;
pub mod game;
pub mod pgn;
pub mod report;

pub use board::{Board, Color, GameStatus, Move, Piece, RulesError, Square};
pub use game::{Game, Ply, ReplayError};
