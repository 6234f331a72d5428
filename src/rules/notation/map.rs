use super::super::board::Board;
use super::super::error::Error;
use super::super::model::{Field, Piece};

/// 8 lines of 8 characters, `.` for empty — no run-length compression.
/// Compact fixtures for tests and diagnostics.
pub fn encode(board: &Board) -> String {
    let mut lines = Vec::with_capacity(8);
    for rank in 0..8 {
        let mut line = String::new();
        for file in 0..8 {
            match board.piece_at(Field::at(rank, file)) {
                Some(piece) => line.push(piece.letter()),
                None => line.push('.'),
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Parses a plain map. Lines are trimmed and blank lines skipped, so
/// indented fixture strings work as-is.
pub fn decode(text: &str) -> Result<Board, Error> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != 8 {
        return Err(Error::Parse(text.to_string()));
    }

    let mut board = Board::empty();
    for (rank, line) in lines.iter().enumerate() {
        if line.chars().count() != 8 {
            return Err(Error::Parse(text.to_string()));
        }
        for (file, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            board.put(Field::at(rank as u8, file as u8), Piece::from_letter(c)?);
        }
    }
    Ok(board)
}
