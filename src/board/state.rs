use super::{CastlingRights, Color, Counter, Piece, Square};

/// What stands on a square, if anything.
pub type Occupant = Option<(Color, Piece)>;

/// The authoritative game position.
///
/// A 64-entry rank-major mailbox (`a1` = 0) plus the state FEN carries alongside
/// the placement. Castling rights are tracked incrementally by the mutator and are
/// never recomputed from where the pieces stand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Occupant; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: Counter,
    pub(crate) fullmove_number: Counter,
}

impl Board {
    /// The standard initial position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::from_coords(0, file), Color::White, *piece);
            board.set_piece(Square::from_coords(7, file), Color::Black, *piece);
            board.set_piece(Square::from_coords(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::from_coords(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board.halfmove_clock = Counter::Value(0);
        board.fullmove_number = Counter::Value(1);
        board
    }

    /// A board with no pieces, white to move, no rights and zeroed counters.
    ///
    /// Not a legal position on its own; the codec fills it in.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: Counter::Value(0),
            fullmove_number: Counter::Value(1),
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Occupant {
        self.squares[sq.index()].take()
    }

    /// Color and kind of the piece on `sq`.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        self.squares[sq.index()]
    }

    /// Kind of the piece on `sq`, ignoring color.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The square a pawn may capture onto en passant this ply.
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> Counter {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> Counter {
        self.fullmove_number
    }

    /// Squares holding a piece of `color`, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Where the king of `color` stands.
    ///
    /// Always `Some` for boards built by the codec or the mutator.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
