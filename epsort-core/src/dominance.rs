//! Box dominance comparison.

#[cfg(test)]
#[path = "../tests/unit/dominance_test.rs"]
mod dominance_test;

use crate::boxes::BoxVector;

/// A relation of one box vector to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxRelation {
    /// No worse in every coordinate and strictly better in at least one.
    Dominates,
    /// The reverse of `Dominates`.
    Dominated,
    /// The very same box.
    Equal,
    /// Better in one coordinate, worse in another.
    Incomparable,
}

/// Compares box vector `a` with `b` in minimization space.
pub fn compare_boxes(a: &BoxVector, b: &BoxVector) -> BoxRelation {
    debug_assert_eq!(a.len(), b.len());

    let mut is_less = false;
    let mut is_greater = false;

    for (a, b) in a.coordinates().iter().zip(b.coordinates().iter()) {
        if a < b {
            is_less = true;
        } else if a > b {
            is_greater = true;
        }

        if is_less && is_greater {
            return BoxRelation::Incomparable;
        }
    }

    match (is_less, is_greater) {
        (true, false) => BoxRelation::Dominates,
        (false, true) => BoxRelation::Dominated,
        _ => BoxRelation::Equal,
    }
}
