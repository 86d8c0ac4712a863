//! Six edge lengths of a candidate tetrahedron.
//!
//! Conventions
//! - Order is `(a, b, c, a1, b1, c1)`: `a, b, c` bound one face, and `a1`,
//!   `b1`, `c1` are the edges opposite `a`, `b`, `c`.
//! - Index `i` and `i + 3` are therefore an opposite pair.
//! - Lengths are expected non-negative and finite; nothing here enforces it.

use crate::perm::Permutation;
use std::fmt;

/// Ordered edge lengths `(a, b, c, a1, b1, c1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edges6(pub [f64; 6]);

impl Edges6 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, a1: f64, b1: f64, c1: f64) -> Self {
        Self([a, b, c, a1, b1, c1])
    }

    /// Argument tuple in predicate order.
    #[inline]
    pub fn args(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a, b, c, a1, b1, c1] = self.0;
        (a, b, c, a1, b1, c1)
    }

    /// Reorder as `out[i] = self[p[i]]`.
    pub fn permuted(&self, p: &Permutation) -> Self {
        let mut out = [0.0; 6];
        for (slot, &src) in out.iter_mut().zip(p.indices().iter()) {
            *slot = self.0[src];
        }
        Self(out)
    }

    /// Largest length (`-inf` never occurs for six finite entries).
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Scale so the longest edge is 1. All-zero input is returned unchanged.
    pub fn normalized(&self) -> Self {
        let m = self.max();
        if m > 0.0 {
            Self(self.0.map(|e| e / m))
        } else {
            *self
        }
    }

    /// Whether the shortest and the longest edge are an opposite pair.
    ///
    /// Ties resolve to the first index of the minimum and the last index of
    /// the maximum, i.e. the ends of a stable ascending sort by `(len, idx)`.
    pub fn min_max_opposite(&self) -> bool {
        let mut lo = 0usize;
        let mut hi = 0usize;
        for (i, &e) in self.0.iter().enumerate() {
            if e < self.0[lo] {
                lo = i;
            }
            if e >= self.0[hi] {
                hi = i;
            }
        }
        lo.abs_diff(hi) == 3
    }
}

impl fmt::Display for Edges6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, a1, b1, c1] = self.0;
        write!(f, "{a:.5} {b:.5} {c:.5} {a1:.5} {b1:.5} {c1:.5}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permuted_reads_source_indices() {
        let e = Edges6::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0);
        let p = Permutation::new([1, 2, 0, 4, 5, 3]).unwrap();
        assert_eq!(e.permuted(&p).0, [1.0, 2.0, 0.0, 4.0, 5.0, 3.0]);
        assert_eq!(e.permuted(&Permutation::identity()), e);
    }

    #[test]
    fn normalized_puts_max_at_one() {
        let e = Edges6::new(0.5, 2.0, 1.0, 0.25, 2.0, 1.5).normalized();
        assert_eq!(e.max(), 1.0);
        assert_eq!(e.0[3], 0.125);
        let z = Edges6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(z.normalized(), z);
    }

    #[test]
    fn min_max_opposite_pairs() {
        // min at 0, max at 3 -> opposite
        assert!(Edges6::new(0.1, 0.5, 0.5, 0.9, 0.5, 0.5).min_max_opposite());
        // min at 0, max at 4 -> adjacent
        assert!(!Edges6::new(0.1, 0.5, 0.5, 0.5, 0.9, 0.5).min_max_opposite());
        // min at 5, max at 2 -> opposite
        assert!(Edges6::new(0.3, 0.4, 0.8, 0.5, 0.6, 0.2).min_max_opposite());
    }

    #[test]
    fn min_max_opposite_ties() {
        // Tied minimum at 1 and 4 resolves to 1; max at 5.
        assert!(!Edges6::new(0.5, 0.1, 0.5, 0.5, 0.1, 2.0).min_max_opposite());
        // All equal: min at 0, max at 5.
        assert!(!Edges6::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).min_max_opposite());
        // Tied maximum at 0 and 5 resolves to 5, opposite the minimum at 2.
        assert!(Edges6::new(0.9, 0.5, 0.1, 0.5, 0.5, 0.9).min_max_opposite());
        // Tied maximum at 0 and 3 resolves to 3; min at 1.
        assert!(!Edges6::new(1.0, 0.2, 0.5, 1.0, 0.5, 0.5).min_max_opposite());
    }

    #[test]
    fn display_five_decimals() {
        let e = Edges6::new(1.0, 2.0, 3.0, 4.0, 5.0, 0.123456);
        assert_eq!(
            e.to_string(),
            "1.00000 2.00000 3.00000 4.00000 5.00000 0.12346"
        );
    }
}
