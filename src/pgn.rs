//! Numbered move-list fragments such as `1.a4 b5 2.axb5 1-0`.
//!
//! Only the movetext is understood. Move numbers (`12.`, `12...`) may stand
//! alone or be glued to the following ply, and a result marker ends the list.
//! Tag pairs are not supported; a `[Event "..."]` token comes through as a ply
//! and fails when it is resolved against the board.

use std::fmt;

/// How a fragment was terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl GameResult {
    fn from_token(token: &str) -> Option<GameResult> {
        match token {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unfinished),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unfinished => "*",
        })
    }
}

/// The plies of a fragment, in order, and its result marker if it had one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub plies: Vec<&'a str>,
    pub result: Option<GameResult>,
}

/// Split a fragment into move tokens. Everything after a result marker is ignored.
#[must_use]
pub fn split_fragment(text: &str) -> Fragment<'_> {
    let mut plies = Vec::new();
    for token in text.split_whitespace() {
        if let Some(result) = GameResult::from_token(token) {
            return Fragment {
                plies,
                result: Some(result),
            };
        }
        let ply = strip_move_number(token);
        if !ply.is_empty() {
            plies.push(ply);
        }
    }
    Fragment {
        plies,
        result: None,
    }
}

/// `12.e4` -> `e4`, `12...` -> ``, `0-0` stays as it is.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }
    let after_number = &token[digits..];
    let after_dots = after_number.trim_start_matches('.');
    if after_dots.len() == after_number.len() {
        token
    } else {
        after_dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_and_detached_numbers() {
        let fragment = split_fragment("1.a4 b5 2. axb5");
        assert_eq!(fragment.plies, vec!["a4", "b5", "axb5"]);
        assert_eq!(fragment.result, None);
    }

    #[test]
    fn test_black_continuation_number() {
        let fragment = split_fragment("12...Nf6 13.O-O 13... 0-0-0");
        assert_eq!(fragment.plies, vec!["Nf6", "O-O", "0-0-0"]);
    }

    #[test]
    fn test_result_marker_terminates() {
        let fragment = split_fragment("1.e4 e5\n2.Qh5 Nc6 3.Bc4 Nf6 4.Qxf7# 1-0 5.e5");
        assert_eq!(fragment.plies.len(), 7);
        assert_eq!(fragment.plies[6], "Qxf7#");
        assert_eq!(fragment.result, Some(GameResult::WhiteWins));

        let fragment = split_fragment("1.d4 d5 1/2-1/2");
        assert_eq!(fragment.result, Some(GameResult::Draw));
        assert_eq!(fragment.result.unwrap().to_string(), "1/2-1/2");
    }

    #[test]
    fn test_tags_pass_through() {
        let fragment = split_fragment("[Event \"x\"] 1.e4");
        assert_eq!(fragment.plies[0], "[Event");
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = split_fragment("  \n");
        assert!(fragment.plies.is_empty());
        assert_eq!(fragment.result, None);
    }
}
