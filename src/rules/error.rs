use thiserror::Error as ThisError;

/// Hard failures surfaced to the caller. Everything soft (a piece with no
/// targets, an empty directive result) is an empty collection instead.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("coordinates out of bounds: rank {rank}, file {file}")]
    OutOfBounds { rank: i16, file: i16 },

    #[error("unknown piece code '{0}'")]
    UnknownPiece(char),

    #[error("could not parse '{0}'")]
    Parse(String),
}
