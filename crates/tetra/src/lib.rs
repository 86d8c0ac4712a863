//! Tetrahedron feasibility from six edge lengths.
//!
//! Three independent predicates decide whether `(a, b, c, a1, b1, c1)` can be
//! realized as a (possibly flat) tetrahedron in R³, where `a, b, c` bound one
//! face and `a1, b1, c1` are the edges opposite them. The predicates
//! cross-check each other over the 24 argument permutations that preserve
//! the verdict, and a parallel Monte Carlo sampler uses them as an oracle.
//!
//! Modules
//! - `edges`: the six-length input (`Edges6`).
//! - `feasible`: Cayley–Menger, folding, and closed-form predicates.
//! - `perm`: argument permutations and their orbit closure.
//! - `check`: canned and random cross-checks between the predicates.
//! - `sample`: Monte Carlo designs, per-worker trials, run aggregation.
//! - `pool`: scoped fan-out/fan-in of worker closures.

pub mod api;
pub mod cfg;
pub mod check;
pub mod edges;
pub mod feasible;
pub mod perm;
pub mod pool;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use edges::Edges6;
pub use feasible::{cayley_menger, closed_form, fold, Algorithm, FeasibilityError};
pub use perm::Permutation;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edges::Edges6;
    pub use crate::feasible::{
        cayley_menger, closed_form, fold, Algorithm, FeasibilityError, FoldFace,
    };
    pub use crate::perm::{closure, valid_permutations, Permutation, GENERATORS};
    pub use crate::sample::{estimate, Design, Estimate, SampleError, SamplerCfg};
}
