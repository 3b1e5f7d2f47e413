use crate::error::{Result, ToggleError};
use crate::graph::Graph;
use crate::state::GameState;
use crate::types::{FastSet, Vertex};

use super::apply::toggle_unchecked;

/// Whether toggling a vertex strictly lowers the number of "on" vertices.
///
/// Toggling flips the vertex itself, its `on_neighbors` lit neighbors and its
/// `degree - on_neighbors` dark ones, so the on-count changes by
/// `(1 - 2*self_on) + (degree - 2*on_neighbors)`. The move is legal iff that is
/// negative, i.e. `self_on + 2*on_neighbors > degree + (1 - self_on)`.
#[inline]
pub fn decreases_on_count(self_on: bool, on_neighbors: usize, degree: usize) -> bool {
    let s = usize::from(self_on);
    s + 2 * on_neighbors > degree + (1 - s)
}

pub(crate) fn ensure_matching(graph: &Graph, state: &GameState) -> Result<()> {
    if state.len() != graph.len() {
        return Err(ToggleError::invalid_state(format!(
            "state has {} bits, graph has {} vertices",
            state.len(),
            graph.len()
        )));
    }
    Ok(())
}

#[inline]
pub(crate) fn is_legal_unchecked(graph: &Graph, state: &GameState, v: Vertex) -> bool {
    // Only lit vertices may be chosen.
    if !state.is_on(v) {
        return false;
    }
    let neighbors_mask = graph.closed_mask(v) & !(1u128 << v);
    let on_neighbors = (state.bits() & neighbors_mask).count_ones() as usize;
    decreases_on_count(true, on_neighbors, graph.degree(v))
}

/// Checked legality of a single move.
pub fn is_legal_move(graph: &Graph, state: &GameState, v: Vertex) -> Result<bool> {
    ensure_matching(graph, state)?;
    graph.check_vertex(v)?;
    Ok(is_legal_unchecked(graph, state, v))
}

pub(crate) fn legal_moves_unchecked(graph: &Graph, state: &GameState) -> Vec<Vertex> {
    (0..graph.len())
        .filter(|&v| is_legal_unchecked(graph, state, v))
        .collect()
}

/// Legal moves in ascending vertex order.
pub fn legal_moves(graph: &Graph, state: &GameState) -> Result<Vec<Vertex>> {
    ensure_matching(graph, state)?;
    Ok(legal_moves_unchecked(graph, state))
}

pub(crate) fn next_states_unchecked(graph: &Graph, state: &GameState) -> FastSet<GameState> {
    let mut out = FastSet::default();
    for v in 0..graph.len() {
        if is_legal_unchecked(graph, state, v) {
            out.insert(toggle_unchecked(graph, *state, v));
        }
    }
    out
}

/// Distinct successor states; different moves reaching the same state collapse.
pub fn next_states(graph: &Graph, state: &GameState) -> Result<FastSet<GameState>> {
    ensure_matching(graph, state)?;
    Ok(next_states_unchecked(graph, state))
}

#[inline]
pub fn is_terminal(graph: &Graph, state: &GameState) -> Result<bool> {
    ensure_matching(graph, state)?;
    Ok((0..graph.len()).all(|v| !is_legal_unchecked(graph, state, v)))
}
