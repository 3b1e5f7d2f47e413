use std::hash::BuildHasherDefault;

use hashbrown::{HashMap, HashSet};

/// Vertex index into a graph, `0..n`.
pub type Vertex = usize;

/// Sprague-Grundy value of a position.
pub type Nimber = u32;

/// States are packed into a `u128`, so this is the largest supported vertex count.
pub const MAX_VERTICES: usize = 128;

pub type FastHasher = BuildHasherDefault<ahash::AHasher>;
pub type FastSet<T> = HashSet<T, FastHasher>;
pub type FastMap<K, V> = HashMap<K, V, FastHasher>;

/// Set of child nimbers collected while resolving one state.
pub type NimberSet = FastSet<Nimber>;

/// Grid indexing helpers (row-major, `w` columns)
#[inline]
pub fn idx_to_rc(idx: Vertex, w: usize) -> (usize, usize) {
    debug_assert!(w > 0);
    (idx / w, idx % w)
}

#[inline]
pub fn rc_to_idx(r: usize, c: usize, h: usize, w: usize) -> Option<Vertex> {
    if r < h && c < w {
        Some(r * w + c)
    } else {
        None
    }
}
