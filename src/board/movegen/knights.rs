use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveKind, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                occupant => moves.push(Move::new(
                    from,
                    to,
                    color,
                    Piece::Knight,
                    occupant.map(|(_, piece)| piece),
                    MoveKind::Normal,
                )),
            }
        }
    }
}
