//! Error types for chess board operations.

use thiserror::Error;

use super::{CastleSide, Color, Move, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string does not have exactly six space-separated fields
    #[error("FEN must have exactly 6 fields, found {found}")]
    FieldCount { found: usize },
    /// Piece placement does not have exactly eight ranks
    #[error("FEN placement must have 8 ranks, found {found}")]
    RankCount { found: usize },
    /// A rank does not describe exactly eight squares
    #[error("rank {rank} describes {squares} squares, expected 8")]
    RankLength { rank: usize, squares: usize },
    /// Two run-length digits follow each other in one rank
    #[error("adjacent digits in rank {rank}")]
    AdjacentDigits { rank: usize },
    /// Invalid piece character in position string
    #[error("invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Castling field is not '-' or an ordered subset of "KQkq"
    #[error("invalid castling field '{found}'")]
    InvalidCastling { found: String },
    /// Invalid en passant square
    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Half-move or full-move counter is neither '-' nor a canonical number
    /// that fits in a `u64`
    #[error("invalid {field} counter '{found}'")]
    InvalidCounter { field: &'static str, found: String },
    /// A side does not have exactly one king
    #[error("{color} has {count} kings, expected exactly 1")]
    KingCount { color: Color, count: usize },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    #[error("rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    #[error("file {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanError {
    /// Empty SAN string
    #[error("empty move token")]
    Empty,
    /// Token does not match any move grammar
    #[error("malformed move token '{san}'")]
    Malformed { san: String },
    /// Invalid square in SAN
    #[error("invalid square in '{san}'")]
    InvalidSquare { san: String },
    /// Invalid promotion piece
    #[error("invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Pawn reaches the last rank but no promotion piece was named
    #[error("'{san}' reaches the last rank without naming a promotion piece")]
    MissingPromotion { san: String },
    /// Promotion suffix on a move that does not promote
    #[error("'{san}' names a promotion but does not reach the last rank")]
    UnexpectedPromotion { san: String },
    /// The `x` marker disagrees with what is on the destination square
    #[error("capture marker in '{san}' does not match the destination")]
    CaptureMismatch { san: String },
    /// No matching legal move found
    #[error("no legal move matches '{san}'")]
    NoMatchingMove { san: String },
    /// Ambiguous move (multiple pieces can reach the target)
    #[error("ambiguous move '{san}' ({candidates} candidates)")]
    AmbiguousMove { san: String, candidates: usize },
}

/// A move that is well formed but not allowed in the position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("no piece on {from}")]
    NoPiece { from: Square },
    #[error("piece on {from} does not belong to the side to move")]
    WrongSide { from: Square },
    #[error("move {mv} does not describe the piece on its source square")]
    PieceMismatch { mv: Move },
    #[error("{mv} is not a reachable move")]
    Unreachable { mv: Move },
    #[error("{color} has no {side:?} castling right")]
    CastlingRightLost { color: Color, side: CastleSide },
    #[error("king or rook is not on its home square for {side:?} castling")]
    CastlingPiecesMissing { side: CastleSide },
    #[error("{side:?} castling path is blocked at {square}")]
    CastlingBlocked { side: CastleSide, square: Square },
    #[error("{side:?} castling passes through an attacked square {square}")]
    CastlingThroughCheck { side: CastleSide, square: Square },
    #[error("{mv} leaves the king in check")]
    LeavesKingInCheck { mv: Move },
}

/// Any failure the rules core can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Parse(#[from] SanError),
    #[error(transparent)]
    Illegal(#[from] IllegalMoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::FieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_rank_length() {
        let err = FenError::RankLength {
            rank: 8,
            squares: 9,
        };
        assert!(err.to_string().contains("rank 8"));
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_san_error_ambiguous() {
        let err = SanError::AmbiguousMove {
            san: "Nc3".to_string(),
            candidates: 2,
        };
        assert!(err.to_string().contains("Nc3"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_rules_error_is_transparent() {
        let err: RulesError = SanError::NoMatchingMove {
            san: "Qh7".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "no legal move matches 'Qh7'");
        assert!(matches!(err, RulesError::Parse(_)));
    }

    #[test]
    fn test_illegal_castling_message() {
        let err = IllegalMoveError::CastlingRightLost {
            color: Color::Black,
            side: CastleSide::Queenside,
        };
        assert!(err.to_string().contains("Black"));
        assert!(err.to_string().contains("Queenside"));
    }
}
