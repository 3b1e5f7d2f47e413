use crate::types::{Nimber, NimberSet};

/// Minimum excluded value: the smallest non-negative integer not in `values`.
/// Linear scan from zero; child sets are bounded by the branching factor.
#[inline]
pub fn mex(values: &NimberSet) -> Nimber {
    let mut m: Nimber = 0;
    while values.contains(&m) {
        m += 1;
    }
    m
}
