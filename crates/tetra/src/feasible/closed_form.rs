use super::faces_close;

/// Whether `(a, b, c, a1, b1, c1)` bound a tetrahedron, via a rearranged determinant.
///
/// Same face prefilter as `cayley_menger`. With squared lengths and
/// `a2 = b1 + c1 - a`, `b2 = a1 + c1 - b`, `c2 = a1 + b1 - c`, accept iff
/// `4 a1 b1 c1 + a2 b2 c2 >= a1 a2² + b1 b2² + c1 c2²`.
pub fn closed_form(a: f64, b: f64, c: f64, a1: f64, b1: f64, c1: f64) -> bool {
    if !faces_close(a, b, c, a1, b1, c1) {
        return false;
    }

    let (a, b, c) = (a * a, b * b, c * c);
    let (a1, b1, c1) = (a1 * a1, b1 * b1, c1 * c1);

    let a2 = b1 + c1 - a;
    let b2 = a1 + c1 - b;
    let c2 = a1 + b1 - c;
    4.0 * a1 * b1 * c1 + a2 * b2 * c2 >= a1 * a2 * a2 + b1 * b2 * b2 + c1 * c2 * c2
}
