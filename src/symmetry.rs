//! Rotation folding for graphs built from two paired `m`-cycles.
//!
//! Only the cyclic rotation is used. Reflections of the same graphs are
//! automorphisms too but are not folded.

use crate::solver::memo::MemoTable;
use crate::state::GameState;
use crate::types::Nimber;

#[inline]
fn rotate_block(block: u128, m: usize) -> u128 {
    // Bit i takes bit i + 1; bit 0 wraps to bit m - 1.
    (block >> 1) | ((block & 1) << (m - 1))
}

/// Shift the outer block `[0, m)` and the inner block `[m, 2m)` left by one
/// position each. Bits at or above `2m` are untouched.
pub fn rotate(state: GameState, m: usize) -> GameState {
    let n = state.len();
    if m == 0 || 2 * m > n {
        debug_assert!(m == 0, "rotation over {m}-cycles needs at least {} bits, state has {n}", 2 * m);
        return state;
    }
    // 2m <= n <= 128, so m <= 64
    let block_mask = (1u128 << m) - 1;
    let bits = state.bits();
    let outer = rotate_block(bits & block_mask, m);
    let inner = rotate_block((bits >> m) & block_mask, m);
    let high = if 2 * m >= 128 { 0 } else { bits & !((1u128 << (2 * m)) - 1) };
    let rotated = outer | (inner << m) | high;
    // Length is unchanged, so from_bits cannot fail.
    GameState::from_bits(rotated, n).unwrap_or(state)
}

/// Apply [`rotate`] `steps` times.
pub fn rotate_by(state: GameState, m: usize, steps: usize) -> GameState {
    if m == 0 {
        return state;
    }
    (0..steps % m).fold(state, |s, _| rotate(s, m))
}

/// Look for `state` or one of its rotations in the memo table and return the
/// nimber of the first one found. At most `m` rotations are tried, bounded by
/// half the vertex count.
pub fn find_equivalent_nimber(memo: &dyn MemoTable, state: &GameState, m: usize) -> Option<Nimber> {
    let tries = m.min(state.len() / 2);
    let mut current = *state;
    for _ in 0..tries {
        if let Some(v) = memo.get(&current) {
            return Some(v);
        }
        current = rotate(current, m);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::memo::InMemoryMemo;

    #[test]
    fn rotates_each_cycle_independently() {
        let s = GameState::parse("1000001100", 10).unwrap();
        assert_eq!(rotate(s, 5).to_string(), "0000111000");
        assert_eq!(rotate_by(s, 5, 5), s);
    }

    #[test]
    fn finds_rotated_entry() {
        let mut memo = InMemoryMemo::default();
        let s = GameState::parse("110000", 6).unwrap();
        memo.put(rotate(s, 3), 4);
        assert_eq!(find_equivalent_nimber(&memo, &s, 3), Some(4));
        let other = GameState::parse("111000", 6).unwrap();
        assert_eq!(find_equivalent_nimber(&memo, &other, 3), None);
    }
}
