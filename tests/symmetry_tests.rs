use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use togglenim::symmetry::rotate_by;
use togglenim::{find_equivalent_nimber, rotate, GameState, Graph, Solver};
use togglenim::solver::{InMemoryMemo, MemoTable};

fn random_state(rng: &mut impl Rng, n: usize) -> GameState {
    GameState::from_bits(rng.gen::<u128>(), n).expect("state")
}

/// For GP(m, k), a state and all of its rotations have the same nimber.
fn check_rotation_invariance(m: usize, k: usize, seed: u64, samples: usize) {
    let graph = Graph::generalized_petersen(m, k).expect("petersen");
    let mut rng = Pcg64::seed_from_u64(seed);
    // Ground truth without folding, one shared context for the whole graph
    let mut plain = Solver::new(graph.clone().without_symmetry());

    for _ in 0..samples {
        let s = random_state(&mut rng, 2 * m);
        let base = plain.solve(&s).unwrap();
        for r in 1..m {
            let rotated = rotate_by(s, m, r);
            assert_eq!(plain.solve(&rotated).unwrap(), base, "GP({m},{k}) {s} vs rotation {r} {rotated}");
        }
        let mut folded = Solver::new(graph.clone());
        assert_eq!(folded.solve(&s).unwrap(), base, "folded solve differs at {s}");
    }
}

#[test]
fn rotation_invariance_gp_5_2() {
    check_rotation_invariance(5, 2, 0x00C0_FFEE, 24);
}

#[test]
fn rotation_invariance_gp_6_1() {
    check_rotation_invariance(6, 1, 42, 16);
}

#[test]
fn rotation_invariance_gp_7_3() {
    check_rotation_invariance(7, 3, 7, 8);
}

#[test]
fn rotation_has_order_m() {
    let mut rng = Pcg64::seed_from_u64(1);
    for m in [3usize, 5, 8, 13] {
        let s = random_state(&mut rng, 2 * m);
        let mut cur = s;
        for _ in 0..m {
            cur = rotate(cur, m);
        }
        assert_eq!(cur, s, "m={m}");
        assert_eq!(rotate(s, m).count_on(), s.count_on());
    }
}

#[test]
fn rotation_is_a_graph_automorphism() {
    // Toggling v then rotating equals rotating then toggling the rotated vertex
    let m = 7;
    let g = Graph::generalized_petersen(m, 2).unwrap();
    let mut rng = Pcg64::seed_from_u64(99);
    let s = random_state(&mut rng, 2 * m);
    for v in 0..2 * m {
        // rotate moves the bit at position p to p - 1 within each block
        let block = v / m * m;
        let rv = block + (v % m + m - 1) % m;
        let lhs = rotate(togglenim::apply_toggle(&g, &s, v).unwrap(), m);
        let rhs = togglenim::apply_toggle(&g, &rotate(s, m), rv).unwrap();
        assert_eq!(lhs, rhs, "vertex {v}");
    }
}

#[test]
fn equivalent_lookup_stops_after_one_cycle() {
    let memo = InMemoryMemo::default();
    let s = GameState::parse("10000000", 8).unwrap();
    assert!(memo.is_empty());
    assert_eq!(find_equivalent_nimber(&memo, &s, 4), None);

    let mut memo = InMemoryMemo::default();
    memo.put(rotate_by(s, 4, 3), 2);
    assert_eq!(find_equivalent_nimber(&memo, &s, 4), Some(2));
}
