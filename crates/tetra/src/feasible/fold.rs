//! Coordinate folding (hinged triangles).
//!
//! Model
//! - Lay `a` on the x-axis from the origin. Vertex 1 closes the triangle
//!   `(a, b, c)` at `(x1, y1)`; vertex 4 closes `(a, c1, b1)` at `(x2, y2)`.
//! - Rotating vertex 4 about the `a` axis moves it between `(x2, y2)` (folded
//!   onto vertex 1's side) and `(x2, -y2)` (unfolded flat). The distance to
//!   vertex 1 sweeps continuously between the two planar distances, so `a1`
//!   is realizable iff it lies in that closed interval.
//!
//! Numerics
//! - Degenerate inputs (a flat base, such as a permuted `(3, 6, 3, 5, 4, 5)`)
//!   put `a1` exactly on an interval end; both ends get a relative slack of
//!   `FOLD_EPS` so rounding in `x`/`y` does not flip those verdicts.

use super::{closes_triangle, FeasibilityError, FoldFace};
use crate::cfg::FOLD_EPS;
use nalgebra::Vector2;

/// Whether `(a, b, c, a1, b1, c1)` bound a tetrahedron, via folding two triangles about `a`.
///
/// Errors with `FeasibilityError::NegativeHeight` when a triangle passes its
/// bound check but its squared height is negative.
pub fn fold(
    a: f64,
    b: f64,
    c: f64,
    a1: f64,
    b1: f64,
    c1: f64,
) -> Result<bool, FeasibilityError> {
    if a == 0.0 {
        // Both anchors coincide: vertex 1 and vertex 4 sit on spheres around it.
        return Ok(b1 == c1 && b == c && closes_triangle(b1, b, a1));
    }

    if !closes_triangle(a, b, c) {
        return Ok(false);
    }
    let v1 = apex(a, b, c, FoldFace::Base)?;

    if !closes_triangle(a, b1, c1) {
        return Ok(false);
    }
    let v4 = apex(a, c1, b1, FoldFace::Folded)?;

    let min_edge = (v1 - v4).norm();
    if a1 < min_edge * (1.0 - FOLD_EPS) {
        return Ok(false);
    }

    let max_edge = (v1 - Vector2::new(v4.x, -v4.y)).norm();
    if max_edge * (1.0 + FOLD_EPS) < a1 {
        return Ok(false);
    }

    Ok(true)
}

/// Apex of the triangle on base `[0, a]` with side `near` from the origin
/// and side `far` from `(a, 0)`, in the upper half-plane.
#[inline]
fn apex(
    a: f64,
    near: f64,
    far: f64,
    face: FoldFace,
) -> Result<Vector2<f64>, FeasibilityError> {
    let x = (a * a + near * near - far * far) / (a + a);
    let squared_height = near * near - x * x;
    if squared_height < 0.0 {
        return Err(FeasibilityError::NegativeHeight {
            face,
            squared_height,
        });
    }
    Ok(Vector2::new(x, squared_height.sqrt()))
}
