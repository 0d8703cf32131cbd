use log::trace;

use super::error::IllegalMoveError;
use super::{Board, CastleSide, Color, Move, Piece};

impl Board {
    /// Play `mv` without checking it.
    ///
    /// Callers guarantee `mv` came from this board's move generator (or passed
    /// [`Board::validate`]); anything else leaves the position meaningless.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move) {
        let color = mv.color();

        if mv.is_capture() {
            self.remove_piece(mv.capture_square());
        }
        self.remove_piece(mv.from());
        let placed = mv.promotion().unwrap_or(mv.piece());
        self.set_piece(mv.to(), color, placed);

        if let Some(side) = mv.castle_side() {
            self.remove_piece(side.rook_from(color));
            self.set_piece(side.rook_to(color), color, Piece::Rook);
        }

        // Rights only ever shrink; clearing one that is already gone changes nothing.
        if mv.piece() == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for sq in [mv.from(), mv.to()] {
            if let Some((owner, side)) = CastleSide::for_rook_home(sq) {
                self.castling_rights.remove(owner, side);
            }
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            mv.from().offset(color.pawn_direction(), 0)
        } else {
            None
        };

        self.halfmove_clock = if mv.piece() == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock.reset()
        } else {
            self.halfmove_clock.increment()
        };
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.increment();
        }
        self.side_to_move = color.opponent();
    }

    /// The position after `mv`, or why `mv` is not allowed. `self` is never changed.
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        self.validate(mv)?;
        let mut next = self.clone();
        next.make_move_unchecked(mv);
        trace!("applied {mv} -> {}", next.to_fen());
        Ok(next)
    }

    /// Play `mv` in place. On error the board is left exactly as it was.
    pub fn play(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        *self = self.apply(mv)?;
        Ok(())
    }
}
