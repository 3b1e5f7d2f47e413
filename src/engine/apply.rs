use crate::error::Result;
use crate::graph::Graph;
use crate::state::GameState;
use crate::types::Vertex;

use super::legality::ensure_matching;

#[inline]
pub(crate) fn toggle_unchecked(graph: &Graph, state: GameState, v: Vertex) -> GameState {
    state.xor_mask(graph.closed_mask(v))
}

/// Flip `v` and every neighbor of `v`, leaving all other vertices alone.
/// Pure transform; legality is not checked here.
pub fn apply_toggle(graph: &Graph, state: &GameState, v: Vertex) -> Result<GameState> {
    ensure_matching(graph, state)?;
    graph.check_vertex(v)?;
    Ok(toggle_unchecked(graph, *state, v))
}
