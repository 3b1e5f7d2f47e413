#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::must_use_candidate, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod error;
pub mod types;
pub mod graph;
pub mod loader;
pub mod state;
pub mod symmetry;

pub mod engine {
    pub mod apply;
    pub mod legality;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::engine::apply::apply_toggle;
pub use crate::engine::legality::{decreases_on_count, is_legal_move, is_terminal, legal_moves, next_states};
pub use crate::error::{Result, ToggleError};
pub use crate::graph::{Graph, GraphFamily, Rotation};
pub use crate::loader::{load_adjacency_file, parse_adjacency_text};
pub use crate::solver::{mex, solve_labelled, SolveReport, SolveStats, Solver};
pub use crate::state::{GameState, StartConfig};
pub use crate::symmetry::{find_equivalent_nimber, rotate};
pub use crate::types::{Nimber, NimberSet, Vertex, MAX_VERTICES};
