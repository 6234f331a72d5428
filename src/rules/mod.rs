pub mod attack;
pub mod board;
pub mod castle;
pub mod directive;
pub mod error;
pub mod model;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod state;
pub mod test_utils;

pub use attack::{attacked, attackers, in_check, legal_move, legal_moves};
pub use board::{Board, Square};
pub use castle::{CastleRights, CastleSide};
pub use directive::{Directive, MoveContext};
pub use error::Error;
pub use model::{Field, Move, Piece, PieceKind, Team};
pub use perft::perft;
pub use state::State;
