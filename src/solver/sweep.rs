use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, ToggleError};
use crate::graph::{Graph, GraphFamily};
use crate::state::StartConfig;

use super::{solve_labelled, SolveReport};

#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub start: StartConfig,
    /// Fold rotations while solving (results are identical either way).
    pub symmetry: bool,
    /// Worker threads; `None` uses the global rayon pool.
    pub threads: Option<usize>,
    pub progress: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            start: StartConfig::All,
            symmetry: true,
            threads: None,
            progress: false,
        }
    }
}

/// Every valid twist for GP(m, _): `1 <= k` and `2k < m`.
pub fn petersen_twists(m: usize) -> Vec<usize> {
    (1..m).take_while(|k| 2 * k < m).collect()
}

/// Solve GP(m, k) for every valid `k`, one independent solve per twist.
///
/// Solves run in parallel, each with its own graph and memo table; the
/// reports come back in ascending `k` order.
pub fn sweep_petersen(m: usize, opts: &SweepOptions) -> Result<Vec<SweepEntry>> {
    let twists = petersen_twists(m);
    if twists.is_empty() {
        return Err(ToggleError::invalid_graph(format!("GP({m}, k) has no valid twist k")));
    }

    let pb = if opts.progress {
        let pb = ProgressBar::new(twists.len() as u64);
        let style = ProgressStyle::with_template("[{elapsed_precise}] GP({msg}, k) {bar:40.cyan/blue} {pos}/{len}")
            .map(|s| s.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.set_message(m.to_string());
        pb
    } else {
        ProgressBar::hidden()
    };

    let run = || -> Result<Vec<SweepEntry>> {
        twists
            .par_iter()
            .map(|&k| -> Result<SweepEntry> {
                let family = GraphFamily::Petersen { m, k };
                let mut graph: Graph = family.build()?;
                if !opts.symmetry {
                    graph = graph.without_symmetry();
                }
                let report = solve_labelled(graph, family.to_string(), &opts.start)?;
                pb.inc(1);
                Ok(SweepEntry { k, report })
            })
            .collect()
    };

    let results = match opts.threads {
        Some(0) => {
            return Err(ToggleError::Config {
                reason: "--threads must be at least 1".to_string(),
            })
        }
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| ToggleError::Config {
                reason: format!("thread pool: {e}"),
            })?
            .install(run),
        None => run(),
    };

    pb.finish_and_clear();
    results
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepEntry {
    pub k: usize,
    #[serde(flatten)]
    pub report: SolveReport,
}
