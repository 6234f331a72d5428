use std::rc::Rc;

use super::board::Board;
use super::castle::{CastleRights, CastleSide};
use super::directive::MoveContext;
use super::model::{Field, Move, Piece, PieceKind, Team};
use super::moves::directives;

/// An immutable position: board, castle rights, en-passant target, side to
/// move, and a shared link to the position it was derived from. `execute`
/// always produces a fresh successor; a state is never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct State {
    board: Board,
    castle_rights: CastleRights,
    en_passant: Option<Field>,
    to_move: Team,
    predecessor: Option<Rc<State>>,
}

impl State {
    /// Wraps a board with fresh full castle rights, WHITE to move.
    pub fn new(board: Board) -> Self {
        Self::from_parts(board, CastleRights::full(), None, Team::White)
    }

    pub fn from_parts(
        board: Board,
        castle_rights: CastleRights,
        en_passant: Option<Field>,
        to_move: Team,
    ) -> Self {
        Self {
            board,
            castle_rights,
            en_passant,
            to_move,
            predecessor: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn castle_rights(&self) -> &CastleRights {
        &self.castle_rights
    }

    pub fn en_passant(&self) -> Option<Field> {
        self.en_passant
    }

    pub fn to_move(&self) -> Team {
        self.to_move
    }

    pub fn predecessor(&self) -> Option<&State> {
        self.predecessor.as_deref()
    }

    /// Pseudo-legal target fields for the piece standing on `from`: every
    /// directive of the piece evaluated in order, same-team destinations
    /// dropped, duplicates removed. Whether a move would leave the mover's
    /// own king in check is not tested here.
    pub fn accessible_fields(&self, from: Field) -> Vec<Field> {
        self.reachable_fields(from, true)
    }

    /// `with_opaque: false` restricts evaluation to the geometric walks;
    /// attack scans use it because opaque rules never capture.
    pub(crate) fn reachable_fields(&self, from: Field, with_opaque: bool) -> Vec<Field> {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return Vec::new(),
        };
        let context = MoveContext {
            state: self,
            from,
            piece,
        };
        let mut fields: Vec<Field> = directives(piece.kind)
            .iter()
            .filter(|directive| with_opaque || directive.may_capture())
            .flat_map(|directive| directive.apply(&context))
            .collect();
        fields.retain(|field| match self.board.piece_at(*field) {
            Some(occupant) => occupant.team != piece.team,
            None => true,
        });
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    /// Applies `mv` and returns the successor position. The receiver is
    /// untouched. No validation happens here: behavior is only defined for
    /// moves drawn from `accessible_fields`.
    pub fn execute(&self, mv: Move) -> State {
        let mut successor = State {
            board: self.board.clone(),
            castle_rights: self.castle_rights,
            en_passant: None,
            to_move: self.to_move.opponent(),
            predecessor: Some(Rc::new(self.clone())),
        };

        // all branches read the pre-move board; the relocation happens last
        if let Some(piece) = self.board.piece_at(mv.from) {
            match piece.kind {
                PieceKind::King => {
                    if self.castle_rights.any(piece.team) {
                        let home = piece.team.home_rank();
                        for side in CastleSide::BOTH {
                            if mv.to.file() == side.king_file() {
                                let corner = Field::at(home, side.rook_home_file());
                                if let Some(rook) = successor.board.take(corner) {
                                    successor
                                        .board
                                        .put(Field::at(home, side.rook_castled_file()), rook);
                                }
                            }
                        }
                    }
                    successor.castle_rights.revoke_all(piece.team);
                }
                PieceKind::Rook => {
                    let side = match mv.from.file() {
                        0 => Some(CastleSide::Queenside),
                        7 => Some(CastleSide::Kingside),
                        _ => None,
                    };
                    if let Some(side) = side {
                        successor.castle_rights.revoke(piece.team, side);
                    }
                }
                PieceKind::Pawn => {
                    if mv.to.file() != mv.from.file() && self.board.piece_at(mv.to).is_none() {
                        // a diagonal step onto an empty field is an
                        // en-passant capture of the bypassed pawn
                        successor.board.take(Field::at(mv.from.rank(), mv.to.file()));
                    } else if (mv.to.rank() as i16 - mv.from.rank() as i16).abs() == 2 {
                        let between = Field::at((mv.from.rank() + mv.to.rank()) / 2, mv.from.file());
                        successor.en_passant = Some(between);
                    }
                }
                _ => {}
            }
        }

        if let Some(piece) = successor.board.take(mv.from) {
            successor.board.put(mv.to, piece);
        }

        successor
    }

    /// Clone with `piece` placed on `field`; the attack scan's probe.
    pub(crate) fn with_occupant(&self, field: Field, piece: Piece) -> State {
        let mut probe = self.clone();
        probe.board.put(field, piece);
        probe
    }
}

impl Default for State {
    /// The standard starting position.
    fn default() -> Self {
        Self::new(Board::initial())
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::PieceKind;
    use super::super::notation::{fen, map};
    use super::super::test_utils::{assert_fields, field, mv};
    use super::*;

    #[test]
    fn test_execute_leaves_the_receiver_untouched() {
        let state = State::default();
        let successor = state.execute(mv("e2e4"));
        assert_eq!(state.board().piece_at(field("e2")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(state.board().piece_at(field("e4")), None);
        assert_eq!(successor.board.piece_at(field("e2")), None);
        assert_eq!(
            successor.board.piece_at(field("e4")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(state.to_move(), Team::White);
        assert_eq!(successor.to_move(), Team::Black);
    }

    #[test]
    fn test_predecessor_chain() {
        let state = State::default();
        let successor = state.execute(mv("e2e4")).execute(mv("e7e5"));
        let back = successor.predecessor().unwrap();
        assert_eq!(back.to_move(), Team::Black);
        assert_eq!(back.board().piece_at(field("e7")).map(|p| p.kind), Some(PieceKind::Pawn));
        let start = back.predecessor().unwrap();
        assert_eq!(start.to_move(), Team::White);
        assert!(start.predecessor().is_none());
    }

    #[test]
    fn test_double_step_sets_and_the_next_move_clears_en_passant() {
        let state = State::default();
        let successor = state.execute(mv("e2e4"));
        assert_eq!(successor.en_passant(), Some(field("e3")));
        let later = successor.execute(mv("g8f6"));
        assert_eq!(later.en_passant(), None);
    }

    #[test]
    fn test_en_passant_window() {
        let board = map::decode(
            "........
             .....p..
             ........
             ....P...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let state = State::new(board).execute(mv("f7f5"));
        assert_eq!(state.en_passant(), Some(field("f6")));
        assert_fields(state.accessible_fields(field("e5")), vec!["e6", "f6"]);
    }

    #[test]
    fn test_en_passant_capture_removes_the_bypassed_pawn() {
        let board = map::decode(
            "........
             .....p..
             ........
             ....P...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let state = State::new(board).execute(mv("f7f5")).execute(mv("e5f6"));
        assert_eq!(state.board().piece_at(field("f5")), None);
        assert_eq!(
            state.board().piece_at(field("f6")),
            Some(Piece::new(Team::White, PieceKind::Pawn))
        );
        assert_eq!(state.board().pieces().count(), 1);
    }

    #[test]
    fn test_castling_becomes_available_once_the_wing_empties() {
        let state = State::default()
            .execute(mv("f1h3"))
            .execute(mv("g1f3"));
        assert!(state.accessible_fields(field("e1")).contains(&field("g1")));
    }

    #[test]
    fn test_castling_is_gone_for_good_after_the_rook_returns() {
        let board = fen::board_from_fen("8/8/8/8/8/8/8/R3K2R").unwrap();
        let state = State::new(board)
            .execute(mv("h1g1"))
            .execute(mv("g1h1"));
        // visually the start position again, but the right is spent
        assert!(!state.accessible_fields(field("e1")).contains(&field("g1")));
        assert!(state.accessible_fields(field("e1")).contains(&field("c1")));
    }

    #[test]
    fn test_castling_survives_the_other_rook_moving() {
        let board = fen::board_from_fen("8/8/8/8/8/8/8/R3K2R").unwrap();
        let state = State::new(board)
            .execute(mv("a1a3"))
            .execute(mv("a3a1"));
        assert!(state.accessible_fields(field("e1")).contains(&field("g1")));
        assert!(!state.accessible_fields(field("e1")).contains(&field("c1")));
    }

    #[test]
    fn test_king_move_revokes_both_sides() {
        let board = fen::board_from_fen("8/8/8/8/8/8/8/R3K2R").unwrap();
        let state = State::new(board).execute(mv("e1e2")).execute(mv("e2e1"));
        let targets = state.accessible_fields(field("e1"));
        assert!(!targets.contains(&field("g1")));
        assert!(!targets.contains(&field("c1")));
    }

    #[test]
    fn test_castling_relocates_the_rook() {
        let board = fen::board_from_fen("8/8/8/8/8/8/8/R3K2R").unwrap();
        let state = State::new(board);

        let kingside = state.execute(mv("e1g1"));
        assert_eq!(
            kingside.board().piece_at(field("f1")),
            Some(Piece::new(Team::White, PieceKind::Rook))
        );
        assert_eq!(
            kingside.board().piece_at(field("g1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(kingside.board().piece_at(field("h1")), None);
        assert!(!kingside.castle_rights().any(Team::White));

        let queenside = state.execute(mv("e1c1"));
        assert_eq!(
            queenside.board().piece_at(field("d1")),
            Some(Piece::new(Team::White, PieceKind::Rook))
        );
        assert_eq!(
            queenside.board().piece_at(field("c1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(queenside.board().piece_at(field("a1")), None);
    }

    #[test]
    fn test_black_castling_mirrors_white() {
        let board = fen::board_from_fen("r3k2r/8/8/8/8/8/8/8").unwrap();
        let state = State::from_parts(board, CastleRights::full(), None, Team::Black);
        let castled = state.execute(mv("e8g8"));
        assert_eq!(
            castled.board().piece_at(field("f8")),
            Some(Piece::new(Team::Black, PieceKind::Rook))
        );
        assert!(!castled.castle_rights().any(Team::Black));
        assert!(castled.castle_rights().any(Team::White));
    }

    #[test]
    fn test_capture_replaces_the_occupant() {
        let board = fen::board_from_fen("8/8/8/3p4/4B3/8/8/8").unwrap();
        let state = State::new(board);
        let successor = state.execute(mv("e4d5"));
        assert_eq!(
            successor.board().piece_at(field("d5")),
            Some(Piece::new(Team::White, PieceKind::Bishop))
        );
        assert_eq!(successor.board().pieces().count(), 1);
    }

    #[test]
    fn test_accessible_fields_of_an_empty_square() {
        let state = State::default();
        assert_fields(state.accessible_fields(field("e4")), vec![]);
    }
}
