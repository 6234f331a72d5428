use super::model::{Field, Piece, PieceKind, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupant of `field` in the standard starting position.
pub(crate) fn initial_piece_at(field: Field) -> Option<Piece> {
    match field.rank() {
        0 => Some(Piece::new(Team::Black, BACK_RANK[field.file() as usize])),
        1 => Some(Piece::new(Team::Black, PieceKind::Pawn)),
        6 => Some(Piece::new(Team::White, PieceKind::Pawn)),
        7 => Some(Piece::new(Team::White, BACK_RANK[field.file() as usize])),
        _ => None,
    }
}

/// An 8×8 grid of squares. The board owns every piece placed on it; a piece
/// moves between squares only through `take` and `put`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for field in Self::fields() {
            if let Some(piece) = initial_piece_at(field) {
                board.put(field, piece);
            }
        }
        board
    }

    pub fn square(&self, field: Field) -> Square {
        self.squares[field.rank() as usize][field.file() as usize]
    }

    pub fn piece_at(&self, field: Field) -> Option<Piece> {
        self.square(field).piece()
    }

    /// Places `piece`, replacing whatever occupied the square.
    pub fn put(&mut self, field: Field, piece: Piece) {
        self.squares[field.rank() as usize][field.file() as usize] = Square::Occupied(piece);
    }

    /// Removes and returns the occupant, leaving the square empty.
    pub fn take(&mut self, field: Field) -> Option<Piece> {
        let occupant = self.piece_at(field);
        self.squares[field.rank() as usize][field.file() as usize] = Square::Empty;
        occupant
    }

    /// All 64 fields in rank-major order, rank 0 first.
    pub fn fields() -> impl Iterator<Item = Field> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Field::at(rank, file)))
    }

    /// Every occupied field with its piece, in rank-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Field, Piece)> + '_ {
        Self::fields().filter_map(move |field| self.piece_at(field).map(|piece| (field, piece)))
    }

    /// First field holding a piece equal to `piece`. Pieces carry no position
    /// of their own, so lookup is a board scan.
    pub fn locate(&self, piece: Piece) -> Option<Field> {
        self.pieces()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(field, _)| field)
    }

    pub fn king_square(&self, team: Team) -> Option<Field> {
        self.locate(Piece::new(team, PieceKind::King))
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for rank in 0..8 {
            let label = 8 - rank;
            board_representation.push_str(&format!("{} │", label));
            for file in 0..8 {
                let square = match self.piece_at(Field::at(rank, file)) {
                    Some(piece) => piece.letter(),
                    None => ' ',
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", label));

            if rank < 7 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
