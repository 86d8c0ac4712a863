//! Argument permutations that preserve the feasibility verdict.
//!
//! Purpose
//! - Relabeling a tetrahedron (choosing another base face, reordering the
//!   edges of that face) permutes the six predicate arguments without
//!   changing the answer. Three such relabelings generate all of them.
//!
//! Model
//! - A `Permutation` is a bijection on the six argument slots, applied to
//!   inputs as `out[i] = in[p[i]]`.
//! - Extending a member `p` by a generator `g` yields `next[i] = p[g[i]]`.
//! - `closure` is a breadth-first orbit expansion from the identity; the
//!   domain has 6! = 720 elements, so it terminates.
//!
//! The closure of `GENERATORS` has 24 elements: one of four faces as the
//! base, times the six orderings (with reflections) of its edges.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// Bijection on the argument slots `0..6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation([usize; 6]);

/// Error for index arrays that are not a bijection on `0..6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    NotABijection { indices: [usize; 6] },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotABijection { indices } => {
                write!(f, "not a permutation of 0..6: {indices:?}")
            }
        }
    }
}

impl std::error::Error for PermutationError {}

impl Permutation {
    pub fn new(indices: [usize; 6]) -> Result<Self, PermutationError> {
        let mut seen = [false; 6];
        for &i in &indices {
            if i >= 6 || seen[i] {
                return Err(PermutationError::NotABijection { indices });
            }
            seen[i] = true;
        }
        Ok(Self(indices))
    }

    #[inline]
    pub const fn identity() -> Self {
        Self([0, 1, 2, 3, 4, 5])
    }

    #[inline]
    pub fn indices(&self) -> &[usize; 6] {
        &self.0
    }

    /// `next[i] = self[g[i]]`.
    #[inline]
    pub fn then(&self, g: &Permutation) -> Self {
        Self(g.0.map(|gi| self.0[gi]))
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1, p2, p3, p4, p5] = self.0;
        write!(f, "{{{p0}, {p1}, {p2}, {p3}, {p4}, {p5}}}")
    }
}

/// Relabelings known to preserve the verdict.
///
/// - `{1,2,0,4,5,3}` rotates the base face.
/// - `{0,2,1,3,5,4}` reflects the base face.
/// - `{5,3,1,2,0,4}` moves the base to the face `(c1, a1, b)`.
pub const GENERATORS: [Permutation; 3] = [
    Permutation([1, 2, 0, 4, 5, 3]),
    Permutation([0, 2, 1, 3, 5, 4]),
    Permutation([5, 3, 1, 2, 0, 4]),
];

/// Smallest set containing the identity that is closed under `generators`.
pub fn closure(generators: &[Permutation]) -> BTreeSet<Permutation> {
    let mut result = BTreeSet::new();
    let mut queued = BTreeSet::from([Permutation::identity()]);
    let mut frontier = VecDeque::from([Permutation::identity()]);
    while let Some(p) = frontier.pop_front() {
        result.insert(p);
        for g in generators {
            let next = p.then(g);
            if queued.insert(next) {
                frontier.push_back(next);
            }
        }
    }
    result
}

/// All 24 verdict-preserving permutations, sorted.
pub fn valid_permutations() -> Vec<Permutation> {
    closure(&GENERATORS).into_iter().collect()
}
