use super::super::{Board, Color, Move, MoveKind, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pushes, double pushes, diagonal captures, en passant and promotions of
    /// the `color` pawn on `from`.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                self.push_pawn_move(from, one, color, None, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(
                                from,
                                two,
                                color,
                                Piece::Pawn,
                                None,
                                MoveKind::DoublePawnPush,
                            ));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((target_color, target)) if target_color != color => {
                    self.push_pawn_move(from, to, color, Some(target), moves);
                }
                Some(_) => {}
                None if self.is_en_passant_capture(from, to, color) => {
                    moves.push(Move::new(
                        from,
                        to,
                        color,
                        Piece::Pawn,
                        Some(Piece::Pawn),
                        MoveKind::EnPassant,
                    ));
                }
                None => {}
            }
        }
    }

    /// True when `to` is the live en passant target and an enemy pawn stands
    /// beside `from` on the destination file.
    fn is_en_passant_capture(&self, from: Square, to: Square, color: Color) -> bool {
        if self.en_passant_target != Some(to) {
            return false;
        }
        let victim = Square::from_coords(from.rank(), to.file());
        self.piece_at(victim) == Some((color.opponent(), Piece::Pawn))
    }

    fn push_pawn_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
        captured: Option<Piece>,
        moves: &mut Vec<Move>,
    ) {
        if to.rank() == color.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(Move::new(
                    from,
                    to,
                    color,
                    Piece::Pawn,
                    captured,
                    MoveKind::Promotion(promo),
                ));
            }
        } else {
            moves.push(Move::new(
                from,
                to,
                color,
                Piece::Pawn,
                captured,
                MoveKind::Normal,
            ));
        }
    }
}
