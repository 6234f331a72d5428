use super::model::{Field, Move, Piece, PieceKind, Team};
use super::state::State;

/// Every field holding a piece of `by` that could reach `target`.
///
/// Pawns only step onto their capture diagonals when those hold an enemy
/// piece, so a plain scan would miss "a pawn could capture here if something
/// were there". The scan therefore runs against a probe copy of the position
/// with a placeholder enemy pawn on `target`; the caller's position is never
/// touched, so the original occupant survives every exit path.
pub fn attackers(state: &State, target: Field, by: Team) -> Vec<Field> {
    let probe = state.with_occupant(target, Piece::new(by.opponent(), PieceKind::Pawn));
    probe
        .board()
        .pieces()
        .filter(|(_, piece)| piece.team == by)
        .filter(|(field, _)| probe.reachable_fields(*field, false).contains(&target))
        .map(|(field, _)| field)
        .collect()
}

/// True when any piece of `by` could reach `target`.
pub fn attacked(state: &State, target: Field, by: Team) -> bool {
    let probe = state.with_occupant(target, Piece::new(by.opponent(), PieceKind::Pawn));
    let result = probe
        .board()
        .pieces()
        .filter(|(_, piece)| piece.team == by)
        .any(|(field, _)| probe.reachable_fields(field, false).contains(&target));
    result
}

/// True when `team`'s king stands on an attacked field. A board without
/// that king is never in check.
pub fn in_check(state: &State, team: Team) -> bool {
    match state.board().king_square(team) {
        Some(king) => attacked(state, king, team.opponent()),
        None => false,
    }
}

/// A pseudo-legal move is legal when the mover's own side is not in check
/// afterwards. This is the only place full legality is enforced.
pub fn legal_move(state: &State, mv: Move) -> bool {
    !in_check(&state.execute(mv), state.to_move())
}

/// Every legal move for the side to move.
pub fn legal_moves(state: &State) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in state.board().pieces() {
        if piece.team != state.to_move() {
            continue;
        }
        for to in state.accessible_fields(from) {
            let mv = Move::new(from, to);
            if legal_move(state, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::super::notation::fen;
    use super::super::test_utils::{assert_fields, field, mv};
    use super::*;

    #[test]
    fn test_attackers_of_c3_at_the_start() {
        let state = State::default();
        assert_fields(
            attackers(&state, field("c3"), Team::White),
            vec!["b1", "b2", "d2"],
        );
    }

    #[test]
    fn test_pawns_attack_empty_diagonals() {
        let board = fen::board_from_fen("8/2P5/8/8/8/8/3p4/8").unwrap();
        let state = State::new(board);
        // the white pawn on c7 covers b8 and d8 even though both are empty
        assert!(attacked(&state, field("b8"), Team::White));
        assert!(!attacked(&state, field("c8"), Team::White));
        assert!(attacked(&state, field("d8"), Team::White));
        // and never its own forward field
        assert!(attacked(&state, field("c1"), Team::Black));
        assert!(!attacked(&state, field("d1"), Team::Black));
        assert!(attacked(&state, field("e1"), Team::Black));
    }

    #[test]
    fn test_probing_does_not_disturb_the_position(){
        let state = State::default();
        let before = state.board().clone();
        attackers(&state, field("e4"), Team::White);
        attacked(&state, field("d5"), Team::Black);
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_sliding_attacks_stop_at_blockers() {
        let board = fen::board_from_fen("8/8/8/8/3bR3/8/8/8").unwrap();
        let state = State::new(board);
        assert!(attacked(&state, field("d4"), Team::White));
        // the bishop shields everything behind it
        assert!(!attacked(&state, field("c4"), Team::White));
        assert!(attacked(&state, field("e8"), Team::White));
    }

    #[test]
    fn test_in_check() {
        let board = fen::board_from_fen("8/8/8/8/8/4r3/8/4K3").unwrap();
        let state = State::new(board);
        assert!(in_check(&state, Team::White));
        assert!(!in_check(&state, Team::Black));

        let board = fen::board_from_fen("8/8/8/8/8/3r4/8/4K3").unwrap();
        assert!(!in_check(&State::new(board), Team::White));
    }

    #[test]
    fn test_a_pinned_piece_may_not_move_away() {
        let board = fen::board_from_fen("1k6/8/8/8/3q4/8/1R6/K7").unwrap();
        let state = State::new(board);
        let moves: Vec<String> = legal_moves(&state)
            .iter()
            .map(|m| m.as_algebraic())
            .collect();
        assert_eq!(moves, vec!["a1a2".to_string(), "a1b1".to_string()]);
    }

    #[test]
    fn test_moving_into_check_is_illegal_but_accessible() {
        let board = fen::board_from_fen("8/8/8/8/8/8/4r3/4K3").unwrap();
        let state = State::new(board);
        // e2 is accessible (a capture) and legal; d2/f2 are accessible yet
        // stay covered by the rook after it is not captured
        assert!(state.accessible_fields(field("e1")).contains(&field("d2")));
        assert!(legal_move(&state, mv("e1e2")));
        assert!(!legal_move(&state, mv("e1d2")));
        assert!(!legal_move(&state, mv("e1f2")));
        assert!(legal_move(&state, mv("e1d1")));
    }

    #[test]
    fn test_legal_moves_respect_the_side_to_move() {
        let state = State::default();
        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| {
            state.board().piece_at(m.from).unwrap().team == Team::White
        }));
    }
}
