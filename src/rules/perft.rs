use super::attack::legal_moves;
use super::state::State;

/// Counts the leaf positions of the legal-move tree to `depth`. Purely a
/// move-generation validation tool; nothing is evaluated or selected.
pub fn perft(state: &State, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in legal_moves(state) {
        nodes += perft(&state.execute(mv), depth - 1);
    }
    nodes
}
