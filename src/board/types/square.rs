//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

use crate::board::error::SquareError;

/// A square on the chess board.
///
/// Stored as a rank-major index (a1=0, b1=1, ..., h8=63) so a square doubles as
/// the index into the board's 64-entry mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square::from_coords(0, 0);
    pub const B1: Square = Square::from_coords(0, 1);
    pub const C1: Square = Square::from_coords(0, 2);
    pub const D1: Square = Square::from_coords(0, 3);
    pub const E1: Square = Square::from_coords(0, 4);
    pub const F1: Square = Square::from_coords(0, 5);
    pub const G1: Square = Square::from_coords(0, 6);
    pub const H1: Square = Square::from_coords(0, 7);
    pub const A8: Square = Square::from_coords(7, 0);
    pub const B8: Square = Square::from_coords(7, 1);
    pub const C8: Square = Square::from_coords(7, 2);
    pub const D8: Square = Square::from_coords(7, 3);
    pub const E8: Square = Square::from_coords(7, 4);
    pub const F8: Square = Square::from_coords(7, 5);
    pub const G8: Square = Square::from_coords(7, 6);
    pub const H8: Square = Square::from_coords(7, 7);

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn from_coords(rank: usize, file: usize) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square((rank * 8 + file) as u8)
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `dr` ranks and `df` files away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.rank() as isize + dr;
        let file = self.file() as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::from_coords(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// The file letter ('a'-'h').
    #[inline]
    #[must_use]
    pub fn file_char(self) -> char {
        (b'a' + self.file() as u8) as char
    }

    /// The rank digit ('1'-'8').
    #[inline]
    #[must_use]
    pub fn rank_char(self) -> char {
        (b'1' + self.rank() as u8) as char
    }
}

/// Parse a file letter into a file index.
pub(crate) fn file_from_char(c: char) -> Option<usize> {
    match c {
        'a'..='h' => Some(c as usize - 'a' as usize),
        _ => None,
    }
}

/// Parse a rank digit into a rank index.
pub(crate) fn rank_from_char(c: char) -> Option<usize> {
    match c {
        '1'..='8' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::from_coords(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let file = chars.next().and_then(file_from_char).ok_or_else(invalid)?;
        let rank = chars.next().and_then(rank_from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Square::from_coords(rank, file))
    }
}
