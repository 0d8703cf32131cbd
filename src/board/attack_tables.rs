//! Precomputed target tables for leaper pieces and ray directions for sliders.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rank/file steps a rook (or queen) slides along.
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rank/file steps a bishop (or queen) slides along.
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        Square::from_index(idx).map_or_else(Vec::new, |from| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df))
                .collect()
        })
    })
}

/// Squares a knight on each square reaches.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_DELTAS));

/// Squares adjacent to each square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets() {
        assert_eq!(KNIGHT_TARGETS[Square::A1.index()].len(), 2);
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(KNIGHT_TARGETS[d4.index()].len(), 8);
        assert!(KNIGHT_TARGETS[Square::B1.index()].contains(&"c3".parse().unwrap()));
    }

    #[test]
    fn test_king_targets() {
        assert_eq!(KING_TARGETS[Square::H8.index()].len(), 3);
        assert_eq!(KING_TARGETS[Square::E1.index()].len(), 5);
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(KING_TARGETS[e4.index()].len(), 8);
    }
}
