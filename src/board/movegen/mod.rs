//! Move generation and legality.
//!
//! Each piece kind produces its geometric ("pseudo-legal") moves; a move is legal
//! when, played on a scratch copy of the board, it leaves the mover's king
//! unattacked. Castling additionally checks its rights, path and king squares
//! before it is generated at all.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::debug;

use super::attack_tables::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::error::IllegalMoveError;
use super::{Board, Color, Move, Piece, Square};

const ALL_DIRECTIONS: [(isize, isize); 8] = [
    STRAIGHT_DIRECTIONS[0],
    STRAIGHT_DIRECTIONS[1],
    STRAIGHT_DIRECTIONS[2],
    STRAIGHT_DIRECTIONS[3],
    DIAGONAL_DIRECTIONS[0],
    DIAGONAL_DIRECTIONS[1],
    DIAGONAL_DIRECTIONS[2],
    DIAGONAL_DIRECTIONS[3],
];

impl Board {
    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => {
                self.generate_sliding_moves(from, color, piece, &DIAGONAL_DIRECTIONS, moves);
            }
            Piece::Rook => {
                self.generate_sliding_moves(from, color, piece, &STRAIGHT_DIRECTIONS, moves);
            }
            Piece::Queen => self.generate_sliding_moves(from, color, piece, &ALL_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Geometric moves of whatever stands on `from`, before the self-check filter.
    pub(crate) fn pseudo_moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some((color, piece)) = self.piece_at(from) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    /// Play `mv` on a scratch copy and report whether the mover's king is attacked.
    pub(crate) fn leaves_king_in_check(&self, mv: Move) -> bool {
        let mut scratch = self.clone();
        scratch.make_move_unchecked(mv);
        scratch.in_check(mv.color())
    }

    /// Legal moves of the piece on `sq`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_moves(&self, sq: Square) -> Vec<Move> {
        if self.color_on(sq) != Some(self.side_to_move) {
            return Vec::new();
        }
        let mut moves = self.pseudo_moves_from(sq);
        moves.retain(|&mv| !self.leaves_king_in_check(mv));
        moves
    }

    /// All legal moves for the side to move, grouped by source square.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        self.pieces_of(self.side_to_move)
            .flat_map(|(sq, _)| self.legal_moves(sq))
            .collect()
    }

    /// Whether the side to move has at least one legal move.
    ///
    /// Stops at the first one found.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.pieces_of(self.side_to_move).any(|(sq, _)| {
            self.pseudo_moves_from(sq)
                .into_iter()
                .any(|mv| !self.leaves_king_in_check(mv))
        })
    }

    /// Why `mv` may not be played here, if it may not.
    pub fn validate(&self, mv: Move) -> Result<(), IllegalMoveError> {
        let result = self.check_move(mv);
        if let Err(err) = &result {
            debug!("illegal move {mv:?}: {err}");
        }
        result
    }

    fn check_move(&self, mv: Move) -> Result<(), IllegalMoveError> {
        let from = mv.from();
        let (color, piece) = self
            .piece_at(from)
            .ok_or(IllegalMoveError::NoPiece { from })?;
        if color != self.side_to_move {
            return Err(IllegalMoveError::WrongSide { from });
        }
        if color != mv.color() || piece != mv.piece() {
            return Err(IllegalMoveError::PieceMismatch { mv });
        }

        if let Some(side) = mv.castle_side() {
            if mv != Move::castle(color, side) {
                return Err(IllegalMoveError::Unreachable { mv });
            }
            self.check_castle(color, side)?;
        } else if !self.pseudo_moves_from(from).contains(&mv) {
            return Err(IllegalMoveError::Unreachable { mv });
        }

        if self.leaves_king_in_check(mv) {
            return Err(IllegalMoveError::LeavesKingInCheck { mv });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.clone();
                child.make_move_unchecked(mv);
                child.perft(depth - 1)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, MoveKind};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_initial_position_moves() {
        let board = Board::new();
        assert_eq!(board.generate_moves().len(), 20);
        assert_eq!(board.legal_moves(sq("g1")).len(), 2);
        assert!(board.legal_moves(sq("e8")).is_empty());
        assert!(board.legal_moves(sq("e4")).is_empty());
    }

    #[test]
    fn test_slider_stops_at_first_piece() {
        let board = Board::from_fen("4k3/8/8/8/R2p3P/8/8/4K3 w - - 0 1");
        let targets: Vec<String> = board
            .legal_moves(sq("a4"))
            .iter()
            .filter(|mv| mv.to().rank() == 3)
            .map(|mv| mv.to().to_string())
            .collect();
        assert_eq!(targets, vec!["b4", "c4", "d4"]);
        let capture = board
            .legal_moves(sq("a4"))
            .into_iter()
            .find(|mv| mv.to() == sq("d4"))
            .unwrap();
        assert_eq!(capture.captured(), Some(Piece::Pawn));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // Knight on e2 is pinned by the rook on e8.
        let board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(board.legal_moves(sq("e2")).is_empty());
        let mv = board.pseudo_moves_from(sq("e2"))[0];
        assert_eq!(
            board.validate(mv),
            Err(IllegalMoveError::LeavesKingInCheck { mv })
        );
    }

    #[test]
    fn test_validate_reasons() {
        let board = Board::new();
        let black_pawn = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .pseudo_moves_from(sq("e7"))[0];
        assert_eq!(
            board.validate(black_pawn),
            Err(IllegalMoveError::WrongSide { from: sq("e7") })
        );

        let castle = Move::castle(Color::White, CastleSide::Kingside);
        assert_eq!(
            board.validate(castle),
            Err(IllegalMoveError::CastlingBlocked {
                side: CastleSide::Kingside,
                square: Square::F1
            })
        );
    }

    #[test]
    fn test_en_passant_requires_victim() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let ep: Vec<Move> = board
            .legal_moves(sq("e5"))
            .into_iter()
            .filter(|mv| mv.kind() == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].capture_square(), sq("d5"));

        // Same target but nothing to capture beside the pawn.
        let board = Board::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 2");
        assert!(board
            .legal_moves(sq("e5"))
            .iter()
            .all(|mv| mv.kind() != MoveKind::EnPassant));
    }

    #[test]
    fn test_has_legal_move_matches_generation() {
        for fen in [
            "3k4/3Q4/8/3P4/B7/8/8/3K4 b - - 0 1",
            "3k4/8/8/8/8/1r6/2r5/K7 w - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        ] {
            let board = Board::from_fen(fen);
            assert_eq!(board.has_legal_move(), !board.generate_moves().is_empty());
        }
    }

    #[test]
    fn test_in_check_geometry() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        assert!(board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
        // A pawn does not attack straight ahead.
        let board = Board::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1");
        assert!(!board.in_check(Color::White));
    }
}
