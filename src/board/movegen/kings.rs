use super::super::attack_tables::{
    DIAGONAL_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, STRAIGHT_DIRECTIONS,
};
use super::super::error::IllegalMoveError;
use super::super::{Board, CastleSide, Color, Move, MoveKind, Piece, Square};

impl Board {
    /// Single steps of the `color` king on `from`, plus any castle that is
    /// currently allowed.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KING_TARGETS[from.index()] {
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                occupant => moves.push(Move::new(
                    from,
                    to,
                    color,
                    Piece::King,
                    occupant.map(|(_, piece)| piece),
                    MoveKind::Normal,
                )),
            }
        }

        if from == CastleSide::king_from(color) {
            for side in CastleSide::BOTH {
                if self.check_castle(color, side).is_ok() {
                    moves.push(Move::castle(color, side));
                }
            }
        }
    }

    /// Every castling precondition, reported in order: the right, the pieces on
    /// their home squares, an empty path, and no attacked king square.
    pub(crate) fn check_castle(&self, color: Color, side: CastleSide) -> Result<(), IllegalMoveError> {
        if !self.castling_rights.has(color, side) {
            return Err(IllegalMoveError::CastlingRightLost { color, side });
        }
        if self.piece_at(CastleSide::king_from(color)) != Some((color, Piece::King))
            || self.piece_at(side.rook_from(color)) != Some((color, Piece::Rook))
        {
            return Err(IllegalMoveError::CastlingPiecesMissing { side });
        }
        if let Some(square) = side.between(color).find(|&sq| !self.is_empty(sq)) {
            return Err(IllegalMoveError::CastlingBlocked { side, square });
        }
        let attacker = color.opponent();
        if let Some(square) = side
            .king_path(color)
            .into_iter()
            .find(|&sq| self.is_square_attacked(sq, attacker))
        {
            return Err(IllegalMoveError::CastlingThroughCheck { side, square });
        }
        Ok(())
    }

    /// Whether any piece of `attacker_color` attacks `square`.
    ///
    /// Pure geometry: pins, castling and whose turn it is play no part.
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        // A pawn attacks diagonally forward, so look one rank behind the target
        // from the attacker's point of view.
        let back = -attacker_color.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(back, df) {
                if self.piece_at(from) == Some((attacker_color, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((attacker_color, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((attacker_color, Piece::King)))
        {
            return true;
        }

        let slider_hits = |directions: &[(isize, isize)], hits: fn(Piece) -> bool| {
            directions.iter().any(|&(dr, df)| {
                matches!(
                    self.first_piece_on_ray(square, dr, df),
                    Some((color, piece)) if color == attacker_color && hits(piece)
                )
            })
        };
        slider_hits(&STRAIGHT_DIRECTIONS[..], Piece::attacks_straight)
            || slider_hits(&DIAGONAL_DIRECTIONS[..], Piece::attacks_diagonally)
    }

    /// Whether the king of `color` is attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}
