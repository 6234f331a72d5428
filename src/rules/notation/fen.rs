use super::super::board::Board;
use super::super::castle::{CastleRights, CastleSide};
use super::super::error::Error;
use super::super::model::{Field, Piece, Team};
use super::super::state::State;

pub const INITIAL_BOARD: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Board field only: 8 ranks from rank 0 (BLACK's home rank) down, runs of
/// empty squares as digits.
pub fn board_to_fen(board: &Board) -> String {
    let mut lines = Vec::with_capacity(8);
    for rank in 0..8 {
        let mut line = String::new();
        let mut empty_run = 0;
        for file in 0..8 {
            match board.piece_at(Field::at(rank, file)) {
                Some(piece) => {
                    if empty_run > 0 {
                        line.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    line.push(piece.letter());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            line.push_str(&empty_run.to_string());
        }
        lines.push(line);
    }
    lines.join("/")
}

/// Parses the board field of a FEN record. Expects exactly 8 ranks.
pub fn board_from_fen(text: &str) -> Result<Board, Error> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != 8 {
        return Err(Error::Parse(text.to_string()));
    }

    let mut board = Board::empty();
    for (rank, line) in ranks.iter().enumerate() {
        let mut file = 0u32;
        for c in line.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run;
            } else {
                if file > 7 {
                    return Err(Error::Parse(text.to_string()));
                }
                board.put(Field::at(rank as u8, file as u8), Piece::from_letter(c)?);
                file += 1;
            }
        }
        if file > 8 {
            return Err(Error::Parse(text.to_string()));
        }
    }
    Ok(board)
}

fn castle_letters(rights: &CastleRights) -> String {
    let mut letters = String::new();
    if rights.allows(Team::White, CastleSide::Kingside) {
        letters.push('K');
    }
    if rights.allows(Team::White, CastleSide::Queenside) {
        letters.push('Q');
    }
    if rights.allows(Team::Black, CastleSide::Kingside) {
        letters.push('k');
    }
    if rights.allows(Team::Black, CastleSide::Queenside) {
        letters.push('q');
    }
    if letters.is_empty() {
        letters.push('-');
    }
    letters
}

/// Full position record: board field, side to move, castle letters,
/// en-passant target. The move counters are not tracked by the core and are
/// always emitted as `0 0`.
pub fn encode(state: &State) -> String {
    let en_passant = match state.en_passant() {
        Some(field) => field.as_algebraic(),
        None => "-".to_string(),
    };
    format!(
        "{} {} {} {} 0 0",
        board_to_fen(state.board()),
        state.to_move().letter(),
        castle_letters(state.castle_rights()),
        en_passant
    )
}

/// Parses a full position record. The two trailing counters are accepted
/// and ignored.
pub fn decode(text: &str) -> Result<State, Error> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if !(4..=6).contains(&parts.len()) {
        return Err(Error::Parse(text.to_string()));
    }

    let board = board_from_fen(parts[0])?;

    let to_move = match parts[1] {
        "w" => Team::White,
        "b" => Team::Black,
        other => return Err(Error::Parse(other.to_string())),
    };

    let mut rights = CastleRights::none();
    if parts[2] != "-" {
        for c in parts[2].chars() {
            match c {
                'K' => rights.grant(Team::White, CastleSide::Kingside),
                'Q' => rights.grant(Team::White, CastleSide::Queenside),
                'k' => rights.grant(Team::Black, CastleSide::Kingside),
                'q' => rights.grant(Team::Black, CastleSide::Queenside),
                _ => return Err(Error::Parse(parts[2].to_string())),
            }
        }
    }

    let en_passant = match parts[3] {
        "-" => None,
        square => Some(Field::from_algebraic(square)?),
    };

    Ok(State::from_parts(board, rights, en_passant, to_move))
}
