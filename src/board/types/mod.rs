//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - compact board square representation (u8 index)
//! - `Move` and `MoveKind` - fully specified moves
//! - `CastlingRights` and `CastleSide` - castling state and geometry
//! - `Counter` - FEN move counters (numbers or `-` placeholders)

mod castling;
mod counter;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use counter::Counter;
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_from_char, rank_from_char};
