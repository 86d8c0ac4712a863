//! Curated surface for the CLI and experiments (unstable).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! may change.

// Predicates
pub use crate::edges::Edges6;
pub use crate::feasible::{
    cayley_menger, closed_form, fold, Algorithm, FeasibilityError, FoldFace,
};
// Relabelings
pub use crate::perm::{closure, valid_permutations, Permutation, GENERATORS};
// Cross-checks
pub use crate::check::{canned_cases, run_canned, run_random, Case, Mismatch, Tally};
// Sampling
pub use crate::sample::{estimate, run_once, Design, Estimate, SampleError, SamplerCfg};
