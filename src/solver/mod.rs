use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::engine::legality::ensure_matching;
use crate::error::Result;
use crate::graph::Graph;
use crate::state::{GameState, StartConfig};
use crate::types::Nimber;

pub mod memo;
pub mod mex;
pub mod resolve;
pub mod sweep;

pub use memo::{InMemoryMemo, MemoStats, MemoTable};
pub use mex::mex;
pub use resolve::resolve;

/// Counters gathered during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    pub memo_hits: u64,
    pub symmetry_hits: u64,
    /// States whose successors were generated.
    pub expansions: u64,
    pub terminal_states: u64,
    pub max_depth: u32,
}

/// Solver context: one immutable graph plus the memo table for solves over it.
///
/// Entries stay valid across solves from different starting states on the
/// same graph; a different graph needs a different `Solver`.
#[derive(Debug)]
pub struct Solver {
    graph: Graph,
    memo: InMemoryMemo,
    stats: SolveStats,
}

impl Solver {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            memo: InMemoryMemo::default(),
            stats: SolveStats::default(),
        }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn memo(&self) -> &InMemoryMemo {
        &self.memo
    }

    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Drop all memoised nimbers and counters.
    pub fn reset(&mut self) {
        self.memo.clear();
        self.stats = SolveStats::default();
    }

    /// Nimber of `start`, reusing whatever the memo already holds.
    pub fn solve(&mut self, start: &GameState) -> Result<Nimber> {
        ensure_matching(&self.graph, start)?;
        Ok(resolve(&self.graph, *start, &mut self.memo, &mut self.stats, 0))
    }

    /// [`Solver::reset`] followed by [`Solver::solve`].
    pub fn solve_fresh(&mut self, start: &GameState) -> Result<Nimber> {
        self.reset();
        self.solve(start)
    }

    /// Memoised nimber of `state`, if it has been resolved.
    pub fn lookup(&self, state: &GameState) -> Option<Nimber> {
        self.memo.get(state)
    }
}

/// Outcome of one labelled solve, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub label: String,
    pub start_label: String,
    pub start: GameState,
    pub vertices: usize,
    pub edges: usize,
    pub symmetry: bool,
    pub nimber: Nimber,
    pub memo_entries: usize,
    pub stats: SolveStats,
    pub elapsed_ms: u128,
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nimber of {} ({}): {}", self.label, self.start_label, self.nimber)
    }
}

/// Build the starting state for `graph`, solve it in a fresh context and
/// report the result under `label`.
pub fn solve_labelled(graph: Graph, label: impl Into<String>, start: &StartConfig) -> Result<SolveReport> {
    let state = start.to_state(graph.len())?;
    let vertices = graph.len();
    let edges = graph.edge_count();
    let symmetry = graph.symmetry().is_some();

    let t0 = Instant::now();
    let mut solver = Solver::new(graph);
    let nimber = solver.solve(&state)?;
    let elapsed_ms = t0.elapsed().as_millis();

    Ok(SolveReport {
        label: label.into(),
        start_label: start.label().to_string(),
        start: state,
        vertices,
        edges,
        symmetry,
        nimber,
        memo_entries: solver.memo().len(),
        stats: solver.stats(),
        elapsed_ms,
    })
}
