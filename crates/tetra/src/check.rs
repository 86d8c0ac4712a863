//! Cross-checks between the feasibility predicates.
//!
//! - `run_canned`: every known case, under every valid relabeling, through
//!   every predicate, compared against the known verdict.
//! - `run_random`: seeded uniform draws, every predicate compared against
//!   `Algorithm::CayleyMenger`.
//!
//! Disagreements are collected as `Mismatch` records, never resolved.

use crate::edges::Edges6;
use crate::feasible::{cayley_menger, Algorithm, FeasibilityError};
use crate::perm::Permutation;
use crate::sample::draw_edges;
use rand::distributions::Uniform;
use rand::Rng;
use std::fmt;

/// Input with a known verdict.
#[derive(Clone, Copy, Debug)]
pub struct Case {
    pub edges: Edges6,
    pub expected: bool,
}

/// Known verdicts: degenerate, canonical, and a 1e-5 boundary pair.
pub fn canned_cases() -> Vec<Case> {
    let r = 3f64.sqrt();
    let table: [([f64; 6], bool); 12] = [
        ([1.0, 1.0, 1.0, 10.0, 10.0, 10.0], true),
        ([0.0, 0.0, 0.0, 10.0, 10.0, 10.0], true),
        ([10.0, 10.0, 10.0, 1.0, 1.0, 1.0], false),
        ([0.0, 0.0, 0.0, 0.0, 0.0, 0.0], true),
        ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], false),
        ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], false),
        ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], false),
        ([3.0, 6.0, 3.0, 5.0, 4.0, 5.0], true),
        ([1.0, 2.0, 4.0, 10.0, 10.0, 10.0], false),
        ([20.0, 20.0, 20.0, 11.0, 11.0, 11.0], false),
        ([r, r, r, 1.00001, 1.00001, 1.00001], true),
        ([r, r, r, 0.99999, 0.99999, 0.99999], false),
    ];
    table
        .into_iter()
        .map(|(edges, expected)| Case {
            edges: Edges6(edges),
            expected,
        })
        .collect()
}

/// One predicate disagreeing with the expected verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub algorithm: Algorithm,
    pub edges: Edges6,
    pub expected: bool,
    pub observed: Result<bool, FeasibilityError>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.observed {
            Ok(v) => write!(f, "{} {} {}", self.algorithm, *v as u8, self.edges),
            Err(err) => write!(f, "{} error({err}) {}", self.algorithm, self.edges),
        }
    }
}

/// Outcome of a batch of checks.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Tally {
    fn record(&mut self, algorithm: Algorithm, edges: Edges6, expected: bool) {
        self.checked += 1;
        let observed = algorithm.eval(&edges);
        if observed != Ok(expected) {
            self.mismatches.push(Mismatch {
                algorithm,
                edges,
                expected,
                observed,
            });
        }
    }

    pub fn merge(&mut self, other: Tally) {
        self.checked += other.checked;
        self.mismatches.extend(other.mismatches);
    }

    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            f.write_str("All tests passed")
        } else {
            write!(f, "{} tests failed", self.mismatches.len())
        }
    }
}

/// Known cases under each of `perms`, through every predicate.
pub fn run_canned(perms: &[Permutation]) -> Tally {
    let mut tally = Tally::default();
    for case in canned_cases() {
        for p in perms {
            let edges = case.edges.permuted(p);
            for algorithm in Algorithm::ALL {
                tally.record(algorithm, edges, case.expected);
            }
        }
    }
    tally
}

/// `trials` uniform draws from `[range.0, range.1)`; every predicate must
/// match the Cayley–Menger verdict.
///
/// Panics if `range` is empty.
pub fn run_random<R: Rng + ?Sized>(rng: &mut R, trials: usize, range: (f64, f64)) -> Tally {
    let dist = Uniform::new(range.0, range.1);
    let mut tally = Tally::default();
    for _ in 0..trials {
        let edges = draw_edges(rng, &dist);
        let (a, b, c, a1, b1, c1) = edges.args();
        let reference = cayley_menger(a, b, c, a1, b1, c1);
        for algorithm in [Algorithm::ClosedForm, Algorithm::Fold] {
            tally.record(algorithm, edges, reference);
        }
    }
    tally
}
