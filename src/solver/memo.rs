use hashbrown::hash_map::Entry;
use serde::Serialize;

use crate::state::GameState;
use crate::types::{FastMap, Nimber};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoStats {
    pub puts: u64,
    pub inserts: u64,
    /// `put` on a key already present; the stored value is kept.
    pub repeats: u64,
}

/// State -> nimber cache for one solve. Once a state is stored its nimber is
/// final: implementations must never replace it with a different value.
pub trait MemoTable {
    fn get(&self, state: &GameState) -> Option<Nimber>;
    fn put(&mut self, state: GameState, nimber: Nimber);
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hash map implementation keyed by the packed state.
#[derive(Debug, Default)]
pub struct InMemoryMemo {
    map: FastMap<GameState, Nimber>,
    stats: MemoStats,
}

impl InMemoryMemo {
    /// Iterate over all entries without allocating.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&GameState, &Nimber)> {
        self.map.iter()
    }

    #[inline]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

impl MemoTable for InMemoryMemo {
    #[inline]
    fn get(&self, state: &GameState) -> Option<Nimber> {
        self.map.get(state).copied()
    }

    #[inline]
    fn put(&mut self, state: GameState, nimber: Nimber) {
        self.stats.puts = self.stats.puts.saturating_add(1);
        match self.map.entry(state) {
            Entry::Occupied(e) => {
                debug_assert_eq!(*e.get(), nimber, "conflicting nimber for state {state}");
                self.stats.repeats = self.stats.repeats.saturating_add(1);
            }
            Entry::Vacant(e) => {
                e.insert(nimber);
                self.stats.inserts = self.stats.inserts.saturating_add(1);
            }
        }
    }

    #[inline]
    fn clear(&mut self) {
        self.map.clear();
        self.stats = MemoStats::default();
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}
