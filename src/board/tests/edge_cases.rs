//! Edge case tests for special chess positions and moves.

use crate::board::{Board, Color, MoveKind, Piece, RulesError, SanError, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_underpromotions_available() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Piece> = board
        .legal_moves(sq("a7"))
        .iter()
        .filter_map(|mv| mv.promotion())
        .collect();
    assert_eq!(
        promotions,
        vec![Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight]
    );

    let next = board.apply(board.parse_san("a8=N").unwrap()).unwrap();
    assert_eq!(next.piece_at(Square::A8), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_promotion_with_capture() {
    let board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mv = board.parse_san("axb8=Q+").unwrap();
    assert_eq!(mv.captured(), Some(Piece::Rook));
    assert_eq!(mv.promotion(), Some(Piece::Queen));
    let next = board.apply(mv).unwrap();
    assert_eq!(next.to_fen(), "1Q2k3/8/8/8/8/8/8/4K3 b - - 0 1");
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let mv = board.parse_san("exd6").unwrap();
    assert_eq!(mv.kind(), MoveKind::EnPassant);
    let next = board.apply(mv).unwrap();
    assert!(next.is_empty(sq("d5")), "Captured pawn should be removed");
    assert_eq!(next.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert!(next.is_empty(sq("e5")));
}

#[test]
fn test_en_passant_only_on_next_ply() {
    let mut board = Board::from_fen("4k3/2p5/8/3P4/8/8/8/4K3 b - - 0 1");
    board.play_san("c5").unwrap();
    assert_eq!(board.en_passant_target(), Some(sq("c6")));
    board.play_san("Kd2").unwrap();
    board.play_san("Kd8").unwrap();
    assert_eq!(board.en_passant_target(), None);
    assert!(matches!(
        board.parse_san("dxc6"),
        Err(RulesError::Parse(SanError::CaptureMismatch { .. }))
    ));
}

#[test]
fn test_en_passant_discovered_check_along_rank() {
    // Capturing en passant would empty the fifth rank between the rook and the king.
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(board
        .legal_moves(sq("e5"))
        .iter()
        .all(|mv| mv.kind() != MoveKind::EnPassant));
    assert!(matches!(
        board.parse_san("exd6"),
        Err(RulesError::Illegal(_))
    ));
}

#[test]
fn test_castling_unavailable_in_check() {
    let board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    assert!(board.generate_moves().iter().all(|mv| !mv.is_castling()));
}

#[test]
fn test_double_check_only_king_can_move() {
    // Rook on the e-file and bishop on the a5-e1 diagonal. The a3 rook could
    // block either line but not both.
    let board = Board::from_fen("4r1k1/8/8/8/1b6/R7/8/4K3 w - - 0 1");
    let mut targets: Vec<Square> = board.generate_moves().iter().map(|mv| mv.to()).collect();
    assert!(board.generate_moves().iter().all(|mv| mv.from() == Square::E1));
    targets.sort();
    assert_eq!(targets, vec![Square::D1, Square::F1, sq("f2")]);
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3rr3/4K3 w - - 0 1");
    let targets: Vec<Square> = board.legal_moves(Square::E1).iter().map(|mv| mv.to()).collect();
    assert_eq!(targets, vec![Square::F1]);
}

#[test]
fn test_pawn_blocked_by_piece() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(board.legal_moves(sq("e2")).is_empty());
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let targets: Vec<Square> = board.legal_moves(sq("e2")).iter().map(|mv| mv.to()).collect();
    assert_eq!(targets, vec![sq("e3")]);
}

#[test]
fn test_checkmate_back_rank() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let next = board.apply(board.parse_san("Ra8#").unwrap()).unwrap();
    assert!(next.is_checkmate());
}
