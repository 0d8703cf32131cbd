//! Move types.

use std::fmt;

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// What kind of move this is, beyond "piece goes from A to B".
///
/// The notation parser fills this in so the mutator never has to re-derive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion(Piece),
}

impl MoveKind {
    /// Stable snake_case name used in structured output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Normal => "normal",
            MoveKind::DoublePawnPush => "double_pawn_push",
            MoveKind::EnPassant => "en_passant",
            MoveKind::CastleKingside => "castle_kingside",
            MoveKind::CastleQueenside => "castle_queenside",
            MoveKind::Promotion(_) => "promotion",
        }
    }
}

/// A fully specified move: once built it never changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    color: Color,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            captured,
            kind,
        }
    }

    /// The king half of a castle for `color` on `side`.
    #[must_use]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        let kind = match side {
            CastleSide::Kingside => MoveKind::CastleKingside,
            CastleSide::Queenside => MoveKind::CastleQueenside,
        };
        Move::new(
            CastleSide::king_from(color),
            side.king_to(color),
            color,
            Piece::King,
            None,
            kind,
        )
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Color of the side making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The piece being moved (a promoting pawn is still a pawn here)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePawnPush)
    }

    /// The wing, if this move is castling
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingside => Some(CastleSide::Kingside),
            MoveKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castle_side().is_some()
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Square of the piece this move removes; differs from `to` only for en passant.
    #[inline]
    #[must_use]
    pub fn capture_square(self) -> Square {
        if self.is_en_passant() {
            Square::from_coords(self.from.rank(), self.to.file())
        } else {
            self.to
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {} {}{}", self.color, self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured}")?;
        }
        match self.kind {
            MoveKind::Normal | MoveKind::Promotion(_) => {}
            other => write!(f, " {}", other.name())?,
        }
        write!(f, ")")
    }
}

/// Long algebraic (UCI) form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castle_constructor() {
        let mv = Move::castle(Color::Black, CastleSide::Queenside);
        assert_eq!(mv.from(), Square::E8);
        assert_eq!(mv.to(), Square::C8);
        assert_eq!(mv.castle_side(), Some(CastleSide::Queenside));
        assert!(!mv.is_capture());
        assert_eq!(mv.to_string(), "e8c8");
    }

    #[test]
    fn test_en_passant_capture_square() {
        let from: Square = "d5".parse().unwrap();
        let to: Square = "c6".parse().unwrap();
        let mv = Move::new(
            from,
            to,
            Color::White,
            Piece::Pawn,
            Some(Piece::Pawn),
            MoveKind::EnPassant,
        );
        assert_eq!(mv.capture_square().to_string(), "c5");
        assert!(mv.is_capture());
    }

    #[test]
    fn test_promotion_display() {
        let from: Square = "a7".parse().unwrap();
        let to: Square = "a8".parse().unwrap();
        let mv = Move::new(
            from,
            to,
            Color::White,
            Piece::Pawn,
            None,
            MoveKind::Promotion(Piece::Knight),
        );
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
        assert_eq!(mv.kind().name(), "promotion");
    }
}
