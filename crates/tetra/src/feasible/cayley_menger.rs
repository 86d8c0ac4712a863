//! Triangle inequalities + Cayley–Menger sign test.
//!
//! Four points with squared pairwise distances embed in R³ iff the
//! Cayley–Menger determinant has the sign of a real (possibly zero) volume,
//! given the faces are triangles. Expanded in the six squared lengths with
//! `A`, `B`, `C` the sums of squared opposite pairs, that sign test reads
//!
//! `a b c + a b1 c1 + a1 b c1 + a1 b1 c <= a a1 (-A+B+C) + b b1 (A-B+C) + c c1 (A+B-C)`.
//!
//! Ref: <https://mathworld.wolfram.com/Cayley-MengerDeterminant.html>

use super::faces_close;

/// Whether `(a, b, c, a1, b1, c1)` bound a tetrahedron, via the Cayley–Menger determinant.
pub fn cayley_menger(a: f64, b: f64, c: f64, a1: f64, b1: f64, c1: f64) -> bool {
    if !faces_close(a, b, c, a1, b1, c1) {
        return false;
    }

    let (a, b, c) = (a * a, b * b, c * c);
    let (a1, b1, c1) = (a1 * a1, b1 * b1, c1 * c1);

    let a_sum = a + a1;
    let b_sum = b + b1;
    let c_sum = c + c1;

    a * b * c + a * b1 * c1 + a1 * b * c1 + a1 * b1 * c
        <= a * a1 * (-a_sum + b_sum + c_sum)
            + b * b1 * (a_sum - b_sum + c_sum)
            + c * c1 * (a_sum + b_sum - c_sum)
}
