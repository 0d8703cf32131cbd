//! JSON shapes printed by the command-line tools.

use serde::Serialize;

use crate::board::{AccessMap, Board, Color, Piece, Square};
use crate::game::Ply;

/// Two-letter piece code: color letter, then `p` for a pawn or the uppercase
/// letter of any other piece (`wp`, `bR`, `wN`).
#[must_use]
pub fn piece_code(color: Color, piece: Piece) -> String {
    let letter = match piece {
        Piece::Pawn => 'p',
        other => other.to_char().to_ascii_uppercase(),
    };
    format!("{}{letter}", color.fen_char())
}

/// Placement and castling state of a position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    /// Rank 1 first, file a first within each rank.
    pub board: [[Option<String>; 8]; 8],
    /// Castling bitmask: WK=1, WQ=2, BK=4, BQ=8.
    pub available_castles: u8,
}

impl BoardReport {
    #[must_use]
    pub fn new(board: &Board) -> Self {
        BoardReport {
            board: std::array::from_fn(|rank| {
                std::array::from_fn(|file| {
                    board
                        .piece_at(Square::from_coords(rank, file))
                        .map(|(color, piece)| piece_code(color, piece))
                })
            }),
            available_castles: board.castling_rights().as_u8(),
        }
    }
}

/// Everything known about one played move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub algebraic: String,
    pub player: Color,
    pub piece: Piece,
    pub kind: &'static str,
    pub promotion: Option<Piece>,
    pub captured: Option<Piece>,
    pub start_rank: usize,
    pub start_file: usize,
    pub end_rank: usize,
    pub end_file: usize,
    /// Position after the move.
    pub fen: String,
    pub board: BoardReport,
}

impl MoveReport {
    #[must_use]
    pub fn new(ply: &Ply) -> Self {
        let mv = ply.mv;
        MoveReport {
            algebraic: ply.san.clone(),
            player: mv.color(),
            piece: mv.piece(),
            kind: mv.kind().name(),
            promotion: mv.promotion(),
            captured: mv.captured(),
            start_rank: mv.from().rank(),
            start_file: mv.from().file(),
            end_rank: mv.to().rank(),
            end_file: mv.to().file(),
            fen: ply.board.to_fen(),
            board: BoardReport::new(&ply.board),
        }
    }
}

/// Access map of a position, rank 1 first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessReport {
    pub side_to_move: Color,
    pub squares: [[Vec<String>; 8]; 8],
}

impl AccessReport {
    #[must_use]
    pub fn new(board: &Board, map: &AccessMap) -> Self {
        AccessReport {
            side_to_move: board.side_to_move(),
            squares: std::array::from_fn(|rank| {
                std::array::from_fn(|file| {
                    map.accessors(Square::from_coords(rank, file))
                        .iter()
                        .map(Square::to_string)
                        .collect()
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::game::Game;

    #[test]
    fn test_piece_codes() {
        assert_eq!(piece_code(Color::White, Piece::Pawn), "wp");
        assert_eq!(piece_code(Color::Black, Piece::Rook), "bR");
        assert_eq!(piece_code(Color::White, Piece::Knight), "wN");
    }

    #[test]
    fn test_move_report_json() {
        let game = Game::replay(Board::new(), ["a4"]).unwrap();
        let report = MoveReport::new(&game.plies()[0]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["algebraic"], json!("a4"));
        assert_eq!(value["player"], json!("white"));
        assert_eq!(value["piece"], json!("pawn"));
        assert_eq!(value["kind"], json!("double_pawn_push"));
        assert_eq!(value["captured"], json!(null));
        assert_eq!(value["start_rank"], json!(1));
        assert_eq!(value["start_file"], json!(0));
        assert_eq!(value["end_rank"], json!(3));
        assert_eq!(value["end_file"], json!(0));
        assert_eq!(
            value["fen"],
            json!("rnbqkbnr/pppppppp/8/8/P7/8/1PPPPPPP/RNBQKBNR b KQkq a3 0 1")
        );
        assert_eq!(value["board"]["available_castles"], json!(15));
        assert_eq!(value["board"]["board"][0][4], json!("wK"));
        assert_eq!(value["board"]["board"][3][0], json!("wp"));
        assert_eq!(value["board"]["board"][1][0], json!(null));
        assert_eq!(value["board"]["board"][7][3], json!("bQ"));
    }

    #[test]
    fn test_access_report() {
        let board = Board::new();
        let report = AccessReport::new(&board, &board.access_map());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["side_to_move"], json!("white"));
        assert_eq!(value["squares"][2][5], json!(["g1", "f2"]));
        assert_eq!(value["squares"][4][4], json!([]));
    }
}
