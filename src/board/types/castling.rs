//! Castling rights type and castling geometry.

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The wing a castle happens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Home square of the king for `color`.
    #[must_use]
    pub const fn king_from(color: Color) -> Square {
        Square::from_coords(color.back_rank(), 4)
    }

    /// Square the king lands on.
    #[must_use]
    pub const fn king_to(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::from_coords(color.back_rank(), 6),
            CastleSide::Queenside => Square::from_coords(color.back_rank(), 2),
        }
    }

    /// Home square of the rook on this wing.
    #[must_use]
    pub const fn rook_from(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::from_coords(color.back_rank(), 7),
            CastleSide::Queenside => Square::from_coords(color.back_rank(), 0),
        }
    }

    /// Square the rook lands on.
    #[must_use]
    pub const fn rook_to(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::from_coords(color.back_rank(), 5),
            CastleSide::Queenside => Square::from_coords(color.back_rank(), 3),
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub(crate) fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let rank = color.back_rank();
        let files = match self {
            CastleSide::Kingside => 5..7,
            CastleSide::Queenside => 1..4,
        };
        files.map(move |file| Square::from_coords(rank, file))
    }

    /// Squares the king stands on, passes, and lands on; none may be attacked.
    pub(crate) fn king_path(self, color: Color) -> [Square; 3] {
        let rank = color.back_rank();
        match self {
            CastleSide::Kingside => [
                Square::from_coords(rank, 4),
                Square::from_coords(rank, 5),
                Square::from_coords(rank, 6),
            ],
            CastleSide::Queenside => [
                Square::from_coords(rank, 4),
                Square::from_coords(rank, 3),
                Square::from_coords(rank, 2),
            ],
        }
    }

    /// The right cleared when a piece leaves or is captured on `sq`, if `sq` is a rook home.
    pub(crate) fn for_rook_home(sq: Square) -> Option<(Color, CastleSide)> {
        Color::BOTH.into_iter().find_map(|color| {
            CastleSide::BOTH
                .into_iter()
                .find(|side| side.rook_from(color) == sq)
                .map(|side| (color, side))
        })
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value (WK=1, WQ=2, BK=4, BQ=8)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}
