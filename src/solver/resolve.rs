use crate::engine::legality::next_states_unchecked;
use crate::graph::Graph;
use crate::state::GameState;
use crate::symmetry::find_equivalent_nimber;
use crate::types::{FastHasher, Nimber, NimberSet};

use super::memo::MemoTable;
use super::SolveStats;

/// Recursive memoised nimber computation.
///
/// Order per state:
/// - memo hit: return the stored nimber
/// - rotation of the state already stored (graphs with a [`crate::graph::Rotation`]):
///   store it for this state too and return it
/// - otherwise expand the successors, resolve each one, store and return their mex
///
/// Every move strictly lowers the on-count, so recursion depth is bounded by
/// the number of lit vertices in the starting state.
///
/// `state.len()` must equal `graph.len()`; [`super::Solver::solve`] checks this.
pub fn resolve(
    graph: &Graph,
    state: GameState,
    memo: &mut dyn MemoTable,
    stats: &mut SolveStats,
    depth: u32,
) -> Nimber {
    stats.max_depth = stats.max_depth.max(depth);

    if let Some(v) = memo.get(&state) {
        stats.memo_hits += 1;
        return v;
    }

    if let Some(rotation) = graph.symmetry() {
        if let Some(v) = find_equivalent_nimber(&*memo, &state, rotation.m) {
            stats.symmetry_hits += 1;
            memo.put(state, v);
            return v;
        }
    }

    let successors = next_states_unchecked(graph, &state);
    stats.expansions += 1;

    // Terminal: no legal move, loss for the player to move
    if successors.is_empty() {
        stats.terminal_states += 1;
        memo.put(state, 0);
        return 0;
    }

    let mut children = NimberSet::with_capacity_and_hasher(successors.len(), FastHasher::default());
    for child in successors {
        children.insert(resolve(graph, child, memo, stats, depth + 1));
    }
    let value = super::mex::mex(&children);
    memo.put(state, value);
    value
}
