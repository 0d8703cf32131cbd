//! Replaying move lists against a starting position.

use log::debug;
use thiserror::Error;

use crate::board::{Board, Move, RulesError};
use crate::pgn::{split_fragment, GameResult};

/// The first token of a move list that could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ply {index} ({token:?}): {source}")]
pub struct ReplayError {
    /// Zero-based position of the token in the list.
    pub index: usize,
    pub token: String,
    #[source]
    pub source: RulesError,
}

/// One played move with the notation it was read from and the position it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ply {
    pub san: String,
    pub mv: Move,
    pub board: Board,
}

/// A starting position and the plies played from it.
#[derive(Clone, Debug)]
pub struct Game {
    start: Board,
    plies: Vec<Ply>,
    result: Option<GameResult>,
}

impl Game {
    #[must_use]
    pub fn new(start: Board) -> Self {
        Game {
            start,
            plies: Vec::new(),
            result: None,
        }
    }

    /// Play every token in order, stopping at the first one that fails.
    pub fn replay<'a, I>(start: Board, tokens: I) -> Result<Game, ReplayError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut game = Game::new(start);
        for (index, token) in tokens.into_iter().enumerate() {
            game.play(token).map_err(|source| {
                debug!("replay stopped at ply {index} ({token:?})");
                ReplayError {
                    index,
                    token: token.to_string(),
                    source,
                }
            })?;
        }
        Ok(game)
    }

    /// Replay a numbered fragment such as `1.a4 b5 2.axb5`.
    pub fn from_fragment(start: Board, text: &str) -> Result<Game, ReplayError> {
        let fragment = split_fragment(text);
        let mut game = Game::replay(start, fragment.plies)?;
        game.result = fragment.result;
        Ok(game)
    }

    /// Resolve and play one SAN token. The game is unchanged on error.
    pub fn play(&mut self, token: &str) -> Result<&Ply, RulesError> {
        let current = self.current();
        let mv = current.parse_san(token)?;
        let board = current.apply(mv)?;
        self.plies.push(Ply {
            san: token.trim().to_string(),
            mv,
            board,
        });
        Ok(&self.plies[self.plies.len() - 1])
    }

    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// The position after the last ply.
    #[must_use]
    pub fn current(&self) -> &Board {
        self.plies.last().map_or(&self.start, |ply| &ply.board)
    }

    #[must_use]
    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    #[must_use]
    pub fn last(&self) -> Option<&Ply> {
        self.plies.last()
    }

    /// The result marker the fragment ended with, if any.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MoveKind, SanError};

    #[test]
    fn test_replay_single_push() {
        let game = Game::replay(Board::new(), ["a4"]).unwrap();
        assert_eq!(game.plies().len(), 1);
        let mv = game.plies()[0].mv;
        assert_eq!(mv.from().to_string(), "a2");
        assert_eq!(mv.to().to_string(), "a4");
        assert_eq!(mv.kind(), MoveKind::DoublePawnPush);
    }

    #[test]
    fn test_replay_reports_failing_ply() {
        let err = Game::replay(Board::new(), ["a4", "c5", "axb5"]).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.token, "axb5");
        assert!(matches!(err.source, RulesError::Parse(_)));
    }

    #[test]
    fn test_failed_play_keeps_game() {
        let mut game = Game::new(Board::new());
        game.play("e4").unwrap();
        assert!(matches!(
            game.play("Nf4"),
            Err(RulesError::Parse(SanError::NoMatchingMove { .. }))
        ));
        assert_eq!(game.plies().len(), 1);
        assert_eq!(
            game.current().to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn test_fragment_with_result() {
        let game = Game::from_fragment(
            Board::new(),
            "1.f3 e5 2.g4 Qh4# 0-1",
        )
        .unwrap();
        assert_eq!(game.plies().len(), 4);
        assert_eq!(game.result(), Some(GameResult::BlackWins));
        assert!(game.current().is_checkmate());
        assert_eq!(game.start(), &Board::new());
    }
}
