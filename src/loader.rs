use std::fs;
use std::path::Path;

use crate::error::{Result, ToggleError};
use crate::graph::Graph;

/// Parse the adjacency-matrix text format: a first line holding the vertex
/// count `n`, then `n` rows of exactly `n` characters over `{0, 1}`.
/// Blank lines after the matrix are ignored. Asymmetric matrices and
/// self-loops are rejected so the solver only ever sees undirected simple graphs.
pub fn parse_adjacency_text(text: &str) -> Result<Graph> {
    // `lines` already drops "\n" and "\r\n"; any other whitespace is a malformed row
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| ToggleError::invalid_graph("empty adjacency file"))?;
    let n: usize = header
        .parse()
        .map_err(|e| ToggleError::invalid_graph(format!("bad vertex count '{header}': {e}")))?;

    let rows: Vec<&str> = lines.collect();
    let trailing_blank = rows.iter().rev().take_while(|l| l.trim().is_empty()).count();
    let rows = &rows[..rows.len() - trailing_blank];

    let graph = Graph::from_matrix(n, rows)?;
    if !graph.is_undirected() {
        return Err(ToggleError::invalid_graph("adjacency matrix is not symmetric"));
    }
    Ok(graph)
}

pub fn load_adjacency_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ToggleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_adjacency_text(&data)
}

/// Render a graph in the same text format.
pub fn to_adjacency_text(graph: &Graph) -> String {
    let n = graph.len();
    let mut out = format!("{n}\n");
    for v in 0..n {
        let mut row = vec!['0'; n];
        for &u in graph.neighbors(v) {
            row[u] = '1';
        }
        out.extend(row);
        out.push('\n');
    }
    out
}
