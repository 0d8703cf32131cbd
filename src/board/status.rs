//! Check, checkmate and stalemate detection.

use std::fmt;

use serde::Serialize;

use super::Board;

/// Game-theoretic state of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Check,
    NoCheck,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Process exit code used by the status tool.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            GameStatus::Check => 0,
            GameStatus::NoCheck => 1,
            GameStatus::Checkmate => 2,
            GameStatus::Stalemate => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameStatus::Check => "check",
            GameStatus::NoCheck => "no_check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }

    /// True for checkmate and stalemate.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Board {
    /// Status of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.in_check(self.side_to_move);
        match (in_check, self.has_legal_move()) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::NoCheck,
            (false, false) => GameStatus::Stalemate,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}
