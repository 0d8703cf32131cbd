use super::super::{Board, Color, Move, MoveKind, Piece, Square};

impl Board {
    /// Walk each ray from `from` until the board edge or the first occupied
    /// square, which is included only when it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::new(from, to, color, piece, None, MoveKind::Normal));
                    }
                    Some((target_color, target)) => {
                        if target_color != color {
                            moves.push(Move::new(
                                from,
                                to,
                                color,
                                piece,
                                Some(target),
                                MoveKind::Normal,
                            ));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    /// First piece met walking from `from` in direction `(dr, df)`.
    pub(crate) fn first_piece_on_ray(
        &self,
        from: Square,
        dr: isize,
        df: isize,
    ) -> Option<(Color, Piece)> {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            if let Some(occupant) = self.piece_at(next) {
                return Some(occupant);
            }
            current = next;
        }
        None
    }
}
