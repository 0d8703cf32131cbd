use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Counter, Piece, Square};

/// FEN of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling letters in the only order FEN allows.
const CASTLING_ORDER: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Kingside),
    ('Q', Color::White, CastleSide::Queenside),
    ('k', Color::Black, CastleSide::Kingside),
    ('q', Color::Black, CastleSide::Queenside),
];

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only canonical FEN is accepted, so that `to_fen` reproduces the input
    /// byte for byte. The counter fields may hold `-` placeholders.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::decode(fen.trim());
        if let Err(err) = &result {
            debug!("rejected FEN {fen:?}: {err}");
        }
        result
    }

    fn decode(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split(' ').collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(parts[2])?;
        board.en_passant_target = parse_en_passant(parts[3], board.side_to_move)?;

        board.halfmove_clock = Counter::parse(parts[4]).ok_or_else(|| FenError::InvalidCounter {
            field: "halfmove",
            found: parts[4].to_string(),
        })?;
        board.fullmove_number =
            Counter::parse(parts[5]).ok_or_else(|| FenError::InvalidCounter {
                field: "fullmove",
                found: parts[5].to_string(),
            })?;

        for color in Color::BOTH {
            let count = board
                .pieces_of(color)
                .filter(|&(_, piece)| piece == Piece::King)
                .count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::from_coords(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let castling: String = CASTLING_ORDER
            .iter()
            .filter(|&&(_, color, side)| self.castling_rights.has(color, side))
            .map(|&(c, _, _)| c)
            .collect();
        let castling = if castling.is_empty() {
            "-".to_string()
        } else {
            castling
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.fen_char(),
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    for (idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - idx;
        let mut file = 0usize;
        let mut previous_was_digit = false;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiece { char: c });
                }
                if previous_was_digit {
                    return Err(FenError::AdjacentDigits { rank: rank + 1 });
                }
                previous_was_digit = true;
                file += run as usize;
            } else {
                previous_was_digit = false;
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file < 8 {
                    board.set_piece(Square::from_coords(rank, file), color, piece);
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankLength {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }
        if file != 8 {
            return Err(FenError::RankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    if field.is_empty() {
        return Err(invalid());
    }

    // Each letter must come strictly after the previous one in KQkq order.
    let mut next = 0;
    for c in field.chars() {
        let offset = CASTLING_ORDER[next..]
            .iter()
            .position(|&(letter, _, _)| letter == c)
            .ok_or_else(invalid)?;
        let (_, color, side) = CASTLING_ORDER[next + offset];
        rights.set(color, side);
        next += offset + 1;
    }
    Ok(rights)
}

fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    // The target sits behind a pawn the opponent just pushed two squares.
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(invalid());
    }
    Ok(Some(sq))
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_fen(s)
    }
}

/// Text grid of the position, rank 8 at the top, with file letters underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(Square::from_coords(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
