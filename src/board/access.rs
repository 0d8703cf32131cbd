//! Per-square access maps.

use super::{Board, Square};

/// For every square, the squares whose piece (of the side to move) can legally
/// move there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessMap {
    accessors: [Vec<Square>; 64],
}

impl AccessMap {
    /// Source squares with a legal move onto `sq`, in index order.
    #[must_use]
    pub fn accessors(&self, sq: Square) -> &[Square] {
        &self.accessors[sq.index()]
    }

    /// Squares at least one piece can reach.
    pub fn reachable(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|sq| !self.accessors[sq.index()].is_empty())
    }
}

impl Board {
    /// Build the access map for the side to move.
    ///
    /// A promotion is one access regardless of how many piece choices it offers.
    #[must_use]
    pub fn access_map(&self) -> AccessMap {
        let mut accessors: [Vec<Square>; 64] = std::array::from_fn(|_| Vec::new());
        for mv in self.generate_moves() {
            let slot = &mut accessors[mv.to().index()];
            if !slot.contains(&mv.from()) {
                slot.push(mv.from());
            }
        }
        for slot in &mut accessors {
            slot.sort_unstable();
        }
        AccessMap { accessors }
    }
}
