use lazy_static::lazy_static;

use super::attack;
use super::castle::CastleSide;
use super::directive::{forward, relative, Directive, MoveContext};
use super::model::{Field, PieceKind};

/// Castling: for every side the team may still castle on, each necessary
/// free file of the home rank must be vacant and unattacked, and the king's
/// own field must not be attacked either. The king's destination field is
/// the candidate; the rook relocation is a side effect of executing it.
fn castle(context: &MoveContext) -> Vec<Field> {
    let team = context.piece.team;
    let home = team.home_rank();

    // vacancy is cheap, so it gates the attack scans
    let open_sides: Vec<CastleSide> = context
        .state
        .castle_rights()
        .sides(team)
        .into_iter()
        .filter(|side| {
            side.free_files()
                .iter()
                .all(|&file| context.board().piece_at(Field::at(home, file)).is_none())
        })
        .collect();
    if open_sides.is_empty() {
        return Vec::new();
    }
    if attack::attacked(context.state, context.from, team.opponent()) {
        return Vec::new();
    }

    let mut targets = Vec::new();
    for side in open_sides {
        let safe = side.free_files().iter().all(|&file| {
            !attack::attacked(context.state, Field::at(home, file), team.opponent())
        });
        if safe {
            targets.push(Field::at(home, side.king_file()));
        }
    }
    targets
}

lazy_static! {
    static ref BISHOP_MOVES: Vec<Directive> =
        vec![relative(1, 1).indefinitely().all_directions().into()];
    static ref ROOK_MOVES: Vec<Directive> =
        vec![forward(1).indefinitely().all_directions().into()];
    static ref QUEEN_MOVES: Vec<Directive> = ROOK_MOVES
        .iter()
        .chain(BISHOP_MOVES.iter())
        .cloned()
        .collect();
    static ref KING_MOVES: Vec<Directive> = QUEEN_MOVES
        .iter()
        .map(|directive| directive.clone().once())
        .chain([Directive::Opaque(castle)])
        .collect();
    static ref KNIGHT_MOVES: Vec<Directive> =
        vec![relative(2, 1).or(1, 2).all_directions().into()];
    static ref PAWN_MOVES: Vec<Directive> = vec![
        forward(1).non_capturing().into(),
        forward(2).non_capturing().if_outset().into(),
        relative(1, 1).or(1, -1).capture_only().en_passant().into(),
    ];
}

/// The fixed directive list of a piece kind, evaluated in order.
pub fn directives(kind: PieceKind) -> &'static [Directive] {
    match kind {
        PieceKind::Pawn => &PAWN_MOVES,
        PieceKind::Knight => &KNIGHT_MOVES,
        PieceKind::Bishop => &BISHOP_MOVES,
        PieceKind::Rook => &ROOK_MOVES,
        PieceKind::Queen => &QUEEN_MOVES,
        PieceKind::King => &KING_MOVES,
    }
}
