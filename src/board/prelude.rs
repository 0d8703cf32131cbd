//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(), GameStatus::NoCheck);
//! ```

pub use super::{
    Board, CastleSide, Color, FenError, GameStatus, IllegalMoveError, Move, MoveKind, Piece,
    RulesError, SanError, Square,
};
