use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, ToggleError};
use crate::types::{idx_to_rc, rc_to_idx, Vertex, MAX_VERTICES};

/// Cyclic automorphism of a graph made of two `m`-vertex cycles laid out as
/// bit ranges `[0, m)` and `[m, 2m)`: shifting both ranges by one position
/// preserves adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    pub m: usize,
}

/// Immutable simple graph over vertices `0..n`.
#[derive(Debug, Clone)]
pub struct Graph {
    // Sorted, deduplicated neighbor lists
    adj: Vec<Vec<Vertex>>,
    // Per-vertex toggle mask: the vertex itself plus its neighbors
    closed: Vec<u128>,
    symmetry: Option<Rotation>,
}

impl Graph {
    /// Build from per-vertex neighbor lists. Duplicates collapse; self-loops and
    /// out-of-range entries are rejected. Symmetry of the relation is a
    /// precondition and is not checked here (see [`Graph::is_undirected`]).
    pub fn from_adjacency(lists: Vec<Vec<Vertex>>) -> Result<Self> {
        let n = lists.len();
        if n > MAX_VERTICES {
            return Err(ToggleError::GraphTooLarge { n, max: MAX_VERTICES });
        }
        let mut adj = Vec::with_capacity(n);
        let mut closed = Vec::with_capacity(n);
        for (v, mut neigh) in lists.into_iter().enumerate() {
            neigh.sort_unstable();
            neigh.dedup();
            let mut mask = 1u128 << v;
            for &u in &neigh {
                if u >= n {
                    return Err(ToggleError::invalid_graph(format!(
                        "vertex {v} lists neighbor {u}, graph has {n} vertices"
                    )));
                }
                if u == v {
                    return Err(ToggleError::invalid_graph(format!("self-loop on vertex {v}")));
                }
                mask |= 1u128 << u;
            }
            adj.push(neigh);
            closed.push(mask);
        }
        Ok(Self { adj, closed, symmetry: None })
    }

    /// Build from `n` rows of `n` characters over `{0, 1}`; bit `j` of row `i`
    /// says whether `i` is adjacent to `j`. Rows are expected to describe a
    /// symmetric relation; an asymmetric matrix yields an inconsistent graph.
    pub fn from_matrix<S: AsRef<str>>(n: usize, rows: &[S]) -> Result<Self> {
        if rows.len() != n {
            return Err(ToggleError::invalid_graph(format!(
                "expected {n} adjacency rows, got {}",
                rows.len()
            )));
        }
        let mut lists = Vec::with_capacity(n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != n {
                return Err(ToggleError::invalid_graph(format!(
                    "row {i} has {len} characters, expected {n}"
                )));
            }
            let mut neigh = Vec::new();
            for (j, ch) in row.chars().enumerate() {
                match ch {
                    '0' => {}
                    '1' => neigh.push(j),
                    other => {
                        return Err(ToggleError::invalid_graph(format!(
                            "row {i} has non-binary character '{other}' at column {j}"
                        )))
                    }
                }
            }
            lists.push(neigh);
        }
        Self::from_adjacency(lists)
    }

    /// Generalized Petersen graph GP(m, k): outer cycle `0..m`, inner vertices
    /// `m..2m` joined at step `k`, spokes `i -- i + m`.
    /// Requires `m >= 3` and `0 < k < m/2`.
    pub fn generalized_petersen(m: usize, k: usize) -> Result<Self> {
        if m < 3 {
            return Err(ToggleError::invalid_graph(format!("GP({m}, {k}) needs m >= 3")));
        }
        if m > MAX_VERTICES / 2 {
            return Err(ToggleError::GraphTooLarge {
                n: m.saturating_mul(2),
                max: MAX_VERTICES,
            });
        }
        if k == 0 || k >= m.div_ceil(2) {
            return Err(ToggleError::invalid_graph(format!(
                "GP({m}, {k}) needs 0 < k < m/2"
            )));
        }
        let lists: Vec<Vec<Vertex>> = (0..2 * m)
            .map(|j| {
                if j < m {
                    vec![(j + m - 1) % m, (j + 1) % m, j + m]
                } else {
                    vec![j - m, (j + m - k) % m + m, (j + k) % m + m]
                }
            })
            .collect();
        let mut g = Self::from_adjacency(lists)?;
        g.symmetry = Some(Rotation { m });
        Ok(g)
    }

    /// `h x w` grid graph, vertex `r * w + c`, four-neighborhood.
    pub fn grid(h: usize, w: usize) -> Result<Self> {
        if h == 0 || w == 0 {
            return Err(ToggleError::invalid_graph(format!("{h} x {w} grid needs h, w >= 1")));
        }
        let n = h.checked_mul(w).unwrap_or(usize::MAX);
        if n > MAX_VERTICES {
            return Err(ToggleError::GraphTooLarge { n, max: MAX_VERTICES });
        }
        let lists: Vec<Vec<Vertex>> = (0..n)
            .map(|k| {
                let (r, c) = idx_to_rc(k, w);
                // Up, down, left, right
                [
                    r.checked_sub(1).and_then(|r| rc_to_idx(r, c, h, w)),
                    rc_to_idx(r + 1, c, h, w),
                    c.checked_sub(1).and_then(|c| rc_to_idx(r, c, h, w)),
                    rc_to_idx(r, c + 1, h, w),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
            })
            .collect();
        Self::from_adjacency(lists)
    }

    /// Two-row "twisted ladder": the top row `0..w` is a path with rungs down to
    /// `w..2w`, and the bottom row is linked at offset `k` instead of 1.
    /// Requires `w >= 3` and `0 < k < w/2`.
    pub fn twisted_ladder(w: usize, k: usize) -> Result<Self> {
        if w < 3 || k == 0 || k >= w.div_ceil(2) {
            return Err(ToggleError::invalid_graph(format!(
                "twisted ladder L({w}, {k}) needs w >= 3 and 0 < k < w/2"
            )));
        }
        if w > MAX_VERTICES / 2 {
            return Err(ToggleError::GraphTooLarge {
                n: w.saturating_mul(2),
                max: MAX_VERTICES,
            });
        }
        let lists: Vec<Vec<Vertex>> = (0..2 * w)
            .map(|j| {
                if j == 0 {
                    vec![1, w]
                } else if j == w {
                    vec![0, w + k]
                } else if j == w - 1 {
                    vec![w - 2, 2 * w - 1]
                } else if j == 2 * w - 1 {
                    vec![w - 1, 2 * w - k - 1]
                } else if j < w {
                    vec![j - 1, j + 1, j + w]
                } else if j - w < k {
                    vec![(j + w - k - 1) % w + w, (j + k) % w + w, j - w]
                } else if 2 * w - j <= k {
                    vec![(j + w - k) % w + w, (j + k + 1) % w + w, j - w]
                } else {
                    vec![(j + w - k) % w + w, (j + k) % w + w, j - w]
                }
            })
            .collect();
        Self::from_adjacency(lists)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v >= self.len() {
            return Err(ToggleError::IndexOutOfRange { vertex: v, n: self.len() });
        }
        Ok(())
    }

    /// Neighbors of `v` in ascending order. Panics if `v` is out of range.
    #[inline]
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }

    #[inline]
    pub fn degree(&self, v: Vertex) -> usize {
        self.adj[v].len()
    }

    /// Bit mask of `v` and its neighbors.
    #[inline]
    pub(crate) fn closed_mask(&self, v: Vertex) -> u128 {
        self.closed[v]
    }

    #[inline]
    pub fn symmetry(&self) -> Option<Rotation> {
        self.symmetry
    }

    /// Same graph with rotation folding disabled.
    pub fn without_symmetry(mut self) -> Self {
        self.symmetry = None;
        self
    }

    /// True when every edge `u -> v` has its reverse `v -> u`.
    pub fn is_undirected(&self) -> bool {
        self.adj
            .iter()
            .enumerate()
            .all(|(u, neigh)| neigh.iter().all(|&v| self.adj[v].binary_search(&u).is_ok()))
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Graph families the CLI can build; each variant knows how to construct its graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphFamily {
    Petersen { m: usize, k: usize },
    Grid { h: usize, w: usize },
    TwistedLadder { w: usize, k: usize },
    File { path: PathBuf },
}

impl GraphFamily {
    pub fn build(&self) -> Result<Graph> {
        match self {
            GraphFamily::Petersen { m, k } => Graph::generalized_petersen(*m, *k),
            GraphFamily::Grid { h, w } => Graph::grid(*h, *w),
            GraphFamily::TwistedLadder { w, k } => Graph::twisted_ladder(*w, *k),
            GraphFamily::File { path } => crate::loader::load_adjacency_file(path),
        }
    }
}

impl fmt::Display for GraphFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFamily::Petersen { m, k } => write!(f, "GP({m}, {k})"),
            GraphFamily::Grid { h, w } => write!(f, "{h} x {w} grid"),
            GraphFamily::TwistedLadder { w, k } => write!(f, "twisted ladder L({w}, {k})"),
            GraphFamily::File { path } => write!(f, "graph from file {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petersen_is_cubic_and_undirected() {
        let g = Graph::generalized_petersen(5, 2).unwrap();
        assert_eq!(g.len(), 10);
        assert!((0..10).all(|v| g.degree(v) == 3));
        assert!(g.is_undirected());
        assert_eq!(g.edge_count(), 15);
        assert_eq!(g.neighbors(5), &[0, 7, 8]);
        assert_eq!(g.symmetry(), Some(Rotation { m: 5 }));
    }

    #[test]
    fn petersen_parameter_domain() {
        assert!(Graph::generalized_petersen(2, 1).is_err());
        assert!(Graph::generalized_petersen(5, 0).is_err());
        assert!(Graph::generalized_petersen(6, 3).is_err());
        assert!(Graph::generalized_petersen(7, 3).is_ok());
        assert!(Graph::generalized_petersen(5, usize::MAX).is_err());
        assert!(Graph::twisted_ladder(5, usize::MAX).is_err());
    }

    #[test]
    fn oversized_families_are_rejected_before_building() {
        assert!(Graph::generalized_petersen(64, 1).is_ok());
        assert!(matches!(
            Graph::generalized_petersen(65, 1),
            Err(ToggleError::GraphTooLarge { n: 130, max: 128 })
        ));
        assert!(matches!(
            Graph::generalized_petersen(1 << 60, 1),
            Err(ToggleError::GraphTooLarge { .. })
        ));
        assert!(matches!(
            Graph::twisted_ladder(1 << 62, 1),
            Err(ToggleError::GraphTooLarge { .. })
        ));
        assert!(matches!(
            Graph::twisted_ladder(usize::MAX, 1),
            Err(ToggleError::GraphTooLarge { n: usize::MAX, .. })
        ));
    }

    #[test]
    fn grid_corners_edges_centre() {
        let g = Graph::grid(3, 3).unwrap();
        assert_eq!(g.neighbors(0), &[1, 3]);
        assert_eq!(g.neighbors(1), &[0, 2, 4]);
        assert_eq!(g.neighbors(4), &[1, 3, 5, 7]);
        assert!(g.symmetry().is_none());
        assert_eq!(Graph::grid(1, 1).unwrap().degree(0), 0);
    }

    #[test]
    fn twisted_ladder_is_simple_and_undirected() {
        for (w, k) in [(5, 2), (7, 2), (9, 2), (13, 2), (14, 3)] {
            let g = Graph::twisted_ladder(w, k).unwrap();
            assert_eq!(g.len(), 2 * w);
            assert!(g.is_undirected(), "L({w}, {k}) not undirected");
        }
        let g = Graph::twisted_ladder(7, 2).unwrap();
        assert_eq!(g.neighbors(7), &[0, 9]);
        assert_eq!(g.neighbors(8), &[1, 10, 12]);
        assert!(Graph::twisted_ladder(4, 2).is_err());
    }

    #[test]
    fn matrix_rejects_self_loop() {
        let rows = ["10", "01"];
        assert!(matches!(
            Graph::from_matrix(2, &rows),
            Err(ToggleError::InvalidGraph { .. })
        ));
    }
}
