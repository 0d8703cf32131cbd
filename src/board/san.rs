//! Standard Algebraic Notation (SAN) support.
//!
//! Tokens are resolved against a position: `e4`, `axb5`, `Nbd7`, `Qh4e1`,
//! `e8=Q`, `O-O-O`. Trailing `+`/`#` and `!`/`?` annotations are ignored, and
//! castling may be written with the digit zero (`0-0`).
//!
//! # Examples
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let mv = board.parse_san("e4").unwrap();
//! assert_eq!(board.move_to_san(mv), "e4");
//! ```

use log::debug;

use super::error::{IllegalMoveError, RulesError, SanError};
use super::{
    file_from_char, rank_from_char, Board, CastleSide, GameStatus, Move, Piece, Square,
};

/// The pieces of a non-castling token, before it is matched against the board.
#[derive(Debug, PartialEq, Eq)]
struct SanParts {
    piece: Piece,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    capture: bool,
    dest: Square,
    promotion: Option<Piece>,
}

impl Board {
    /// Resolve one SAN token to the single legal move it names.
    ///
    /// Notation problems (bad grammar, no or several matching moves, a wrong
    /// capture marker) are [`RulesError::Parse`]. A token that names exactly the
    /// moves ruled out by the self-check rule, or a castle that is not allowed,
    /// is [`RulesError::Illegal`].
    pub fn parse_san(&self, token: &str) -> Result<Move, RulesError> {
        let result = self.resolve_san(token);
        if let Err(err) = &result {
            debug!("rejected {token:?} in {}: {err}", self.to_fen());
        }
        result
    }

    fn resolve_san(&self, token: &str) -> Result<Move, RulesError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(SanError::Empty.into());
        }
        let san = trimmed.trim_end_matches(['+', '#', '!', '?']);

        if let Some(side) = castle_side(san) {
            let mv = Move::castle(self.side_to_move, side);
            self.validate(mv)?;
            return Ok(mv);
        }

        let parts = split_san(san)?;
        let color = self.side_to_move;

        let reaches_last_rank =
            parts.piece == Piece::Pawn && parts.dest.rank() == color.pawn_promotion_rank();
        match (reaches_last_rank, parts.promotion) {
            (true, None) => {
                return Err(SanError::MissingPromotion {
                    san: san.to_string(),
                }
                .into())
            }
            (false, Some(_)) => {
                return Err(SanError::UnexpectedPromotion {
                    san: san.to_string(),
                }
                .into())
            }
            _ => {}
        }

        let enemy_on_dest = self.color_on(parts.dest) == Some(color.opponent());
        let en_passant =
            parts.piece == Piece::Pawn && self.en_passant_target == Some(parts.dest);
        if parts.capture != (enemy_on_dest || en_passant) {
            return Err(SanError::CaptureMismatch {
                san: san.to_string(),
            }
            .into());
        }

        let reachable: Vec<Move> = self
            .pieces_of(color)
            .filter(|&(sq, piece)| {
                piece == parts.piece
                    && parts.from_file.map_or(true, |file| sq.file() == file)
                    && parts.from_rank.map_or(true, |rank| sq.rank() == rank)
            })
            .flat_map(|(sq, _)| self.pseudo_moves_from(sq))
            .filter(|mv| {
                mv.to() == parts.dest && !mv.is_castling() && mv.promotion() == parts.promotion
            })
            .collect();

        let legal: Vec<Move> = reachable
            .iter()
            .copied()
            .filter(|&mv| !self.leaves_king_in_check(mv))
            .collect();

        match (legal.as_slice(), reachable.first()) {
            ([mv], _) => Ok(*mv),
            ([], Some(&mv)) => Err(IllegalMoveError::LeavesKingInCheck { mv }.into()),
            ([], None) => Err(SanError::NoMatchingMove {
                san: san.to_string(),
            }
            .into()),
            (candidates, _) => Err(SanError::AmbiguousMove {
                san: san.to_string(),
                candidates: candidates.len(),
            }
            .into()),
        }
    }

    /// Resolve `token` and play it. The board is unchanged on error.
    pub fn play_san(&mut self, token: &str) -> Result<Move, RulesError> {
        let mv = self.parse_san(token)?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nbd7", "exd6", "O-O-O", "e8=Q#".
    #[must_use]
    pub fn move_to_san(&self, mv: Move) -> String {
        let mut san = String::new();

        match mv.castle_side() {
            Some(CastleSide::Kingside) => san.push_str("O-O"),
            Some(CastleSide::Queenside) => san.push_str("O-O-O"),
            None => {
                if mv.piece() == Piece::Pawn {
                    if mv.is_capture() {
                        san.push(mv.from().file_char());
                    }
                } else {
                    san.push(mv.piece().to_char().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                    if needs_file {
                        san.push(mv.from().file_char());
                    }
                    if needs_rank {
                        san.push(mv.from().rank_char());
                    }
                }
                if mv.is_capture() {
                    san.push('x');
                }
                san.push_str(&mv.to().to_string());
                if let Some(promo) = mv.promotion() {
                    san.push('=');
                    san.push(promo.to_char().to_ascii_uppercase());
                }
            }
        }

        let mut after = self.clone();
        after.make_move_unchecked(mv);
        match after.status() {
            GameStatus::Checkmate => san.push('#'),
            GameStatus::Check => san.push('+'),
            GameStatus::NoCheck | GameStatus::Stalemate => {}
        }
        san
    }

    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: Move) -> (bool, bool) {
        let rivals: Vec<Square> = self
            .pieces_of(mv.color())
            .filter(|&(sq, piece)| piece == mv.piece() && sq != mv.from())
            .filter(|&(sq, _)| self.legal_moves(sq).iter().any(|m| m.to() == mv.to()))
            .map(|(sq, _)| sq)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }
        let same_file = rivals.iter().any(|sq| sq.file() == mv.from().file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from().rank());
        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}

fn castle_side(san: &str) -> Option<CastleSide> {
    match san {
        "O-O" | "0-0" => Some(CastleSide::Kingside),
        "O-O-O" | "0-0-0" => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// Split a non-castling token into `[piece][file][rank][x]dest[[=]promotion]`.
fn split_san(san: &str) -> Result<SanParts, SanError> {
    let malformed = || SanError::Malformed {
        san: san.to_string(),
    };
    let mut chars: Vec<char> = san.chars().collect();

    let piece = match chars.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            chars.remove(0);
            Piece::from_san_letter(c).ok_or_else(malformed)?
        }
        Some(_) => Piece::Pawn,
        None => return Err(malformed()),
    };

    let mut promotion = None;
    if let Some(&last) = chars.last() {
        if last.is_ascii_uppercase() {
            chars.pop();
            let promo = Piece::from_san_letter(last)
                .filter(|p| p.is_promotion_target())
                .ok_or(SanError::InvalidPromotion { char: last })?;
            if chars.last() == Some(&'=') {
                chars.pop();
            }
            promotion = Some(promo);
        } else if last == '=' {
            return Err(malformed());
        }
    }
    if promotion.is_some() && piece != Piece::Pawn {
        return Err(malformed());
    }

    if chars.len() < 2 {
        return Err(malformed());
    }
    let dest_chars = chars.split_off(chars.len() - 2);
    let dest = match (
        file_from_char(dest_chars[0]),
        rank_from_char(dest_chars[1]),
    ) {
        (Some(file), Some(rank)) => Square::from_coords(rank, file),
        _ => {
            return Err(SanError::InvalidSquare {
                san: san.to_string(),
            })
        }
    };

    let capture = chars.last() == Some(&'x');
    if capture {
        chars.pop();
    }

    let mut rest = chars.into_iter().peekable();
    let from_file = rest.next_if(|c| file_from_char(*c).is_some()).and_then(file_from_char);
    let from_rank = rest.next_if(|c| rank_from_char(*c).is_some()).and_then(rank_from_char);
    if rest.next().is_some() {
        return Err(malformed());
    }

    // Pawn captures name their file and nothing else; pawn pushes name nothing.
    if piece == Piece::Pawn {
        let well_formed = if capture {
            from_file.is_some() && from_rank.is_none()
        } else {
            from_file.is_none() && from_rank.is_none()
        };
        if !well_formed {
            return Err(malformed());
        }
    }

    Ok(SanParts {
        piece,
        from_file,
        from_rank,
        capture,
        dest,
        promotion,
    })
}
