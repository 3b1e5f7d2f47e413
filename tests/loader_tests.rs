use std::io::Write;

use togglenim::loader::to_adjacency_text;
use togglenim::{load_adjacency_file, parse_adjacency_text, GameState, Graph, Solver, ToggleError};

fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tmp file");
    f.write_all(contents.as_bytes()).expect("write");
    f.flush().expect("flush");
    f
}

#[test]
fn petersen_matrix_round_trips_through_file() {
    let gp = Graph::generalized_petersen(5, 2).unwrap();
    let text = to_adjacency_text(&gp);
    assert!(text.starts_with("10\n"));

    let f = write_tmp(&text);
    let loaded = load_adjacency_file(f.path()).expect("load");
    assert_eq!(loaded.len(), 10);
    for v in 0..10 {
        assert_eq!(loaded.neighbors(v), gp.neighbors(v));
    }
    // File graphs never carry rotation folding
    assert!(loaded.symmetry().is_none());

    let mut solver = Solver::new(loaded);
    assert_eq!(solver.solve(&GameState::all_on(10).unwrap()).unwrap(), 1);
}

#[test]
fn small_matrix_with_trailing_blank_lines() {
    let g = parse_adjacency_text("3\n010\n101\n010\n\n\n").expect("parse");
    assert_eq!(g.neighbors(1), &[0, 2]);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let g = parse_adjacency_text("3\r\n010\r\n101\r\n010\r\n").expect("parse");
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn rejects_malformed_matrices() {
    let cases = [
        ("", "empty"),
        ("x\n0\n", "bad header"),
        ("3\n010\n101\n", "missing row"),
        ("3\n010\n101\n010\n010\n", "extra row"),
        ("3\n010\n1010\n010\n", "long row"),
        ("3\n010\n1x1\n010\n", "non-binary"),
        ("3\n011\n101\n010\n", "asymmetric"),
        ("2\n11\n10\n", "self-loop"),
        ("3\n010\n101 \n010\n", "padded row"),
        ("3\n 010\n101\n010\n", "indented row"),
    ];
    for (text, what) in cases {
        let err = parse_adjacency_text(text).expect_err(what);
        assert!(matches!(err, ToggleError::InvalidGraph { .. }), "{what}: {err}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let err = load_adjacency_file(dir.path().join("nope.txt")).expect_err("missing file");
    assert!(matches!(err, ToggleError::Io { .. }));
}
