//! Tetrahedron feasibility predicates (three independent derivations).
//!
//! Purpose
//! - Decide whether six lengths `(a, b, c, a1, b1, c1)` admit a (possibly
//!   degenerate) tetrahedron in R³. All three predicates must agree; they
//!   exist to cross-validate each other.
//!
//! Assumptions and conventions
//! - Inputs are non-negative and finite. Other inputs give an unspecified
//!   verdict.
//! - Comparisons are plain floating-point `<=`/`>=`; only the folding
//!   interval carries a relative slack (`cfg::FOLD_EPS`).
//! - `fold` is fallible: a negative squared height during triangle
//!   construction is a `FeasibilityError`, not a `false` verdict.
//!
//! Code cross-refs: `Edges6`, `perm::valid_permutations`, `check`.

mod cayley_menger;
mod closed_form;
mod fold;

pub use cayley_menger::cayley_menger;
pub use closed_form::closed_form;
pub use fold::fold;

use crate::edges::Edges6;
use std::fmt;
use std::str::FromStr;

/// `|x - y| <= z <= x + y`: `z` closes a (possibly flat) triangle with `x`, `y`.
#[inline]
pub(crate) fn closes_triangle(x: f64, y: f64, z: f64) -> bool {
    (x - y).abs() <= z && z <= x + y
}

/// Prefilter of the determinant tests: faces `(a, b1, c1)`, `(b, a1, c1)`
/// and `(c, a1, b1)` are triangles.
#[inline]
pub(crate) fn faces_close(a: f64, b: f64, c: f64, a1: f64, b1: f64, c1: f64) -> bool {
    closes_triangle(b1, c1, a) && closes_triangle(a1, c1, b) && closes_triangle(a1, b1, c)
}

/// Triangle of the folding construction that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldFace {
    /// Triangle `(a, b, c)` in the base plane.
    Base,
    /// Triangle `(a, c1, b1)` folded about `a`.
    Folded,
}

impl fmt::Display for FoldFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base face (a, b, c)"),
            Self::Folded => f.write_str("folded face (a, c1, b1)"),
        }
    }
}

/// Domain error raised by the folding construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeasibilityError {
    /// The triangle passed its bound check but its squared height came out negative.
    NegativeHeight { face: FoldFace, squared_height: f64 },
}

impl fmt::Display for FeasibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeHeight {
                face,
                squared_height,
            } => write!(f, "negative squared height {squared_height:e} on {face}"),
        }
    }
}

impl std::error::Error for FeasibilityError {}

/// Predicate selector for oracles and harnesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    CayleyMenger,
    Fold,
    ClosedForm,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::CayleyMenger, Self::Fold, Self::ClosedForm];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CayleyMenger => "CayleyMenger",
            Self::Fold => "Fold",
            Self::ClosedForm => "ClosedForm",
        }
    }

    /// Evaluate the selected predicate on `e`.
    #[inline]
    pub fn eval(&self, e: &Edges6) -> Result<bool, FeasibilityError> {
        let (a, b, c, a1, b1, c1) = e.args();
        match self {
            Self::CayleyMenger => Ok(cayley_menger(a, b, c, a1, b1, c1)),
            Self::Fold => fold(a, b, c, a1, b1, c1),
            Self::ClosedForm => Ok(closed_form(a, b, c, a1, b1, c1)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cm" | "cayley-menger" | "cayleymenger" => Ok(Self::CayleyMenger),
            "fold" => Ok(Self::Fold),
            "closed" | "closed-form" | "closedform" => Ok(Self::ClosedForm),
            other => Err(format!(
                "unknown algorithm '{other}' (expected cm, fold, or closed)"
            )),
        }
    }
}

#[cfg(test)]
mod tests;
