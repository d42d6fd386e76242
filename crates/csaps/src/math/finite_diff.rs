//! Finite differences and padding along the site axis.
//!
//! Matrices here are laid out with one row per data site and one column per
//! data channel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use ndarray::{s, Array2};
use num_traits::Float;

/// First differences of a sequence: `out[i] = v[i + 1] - v[i]`.
pub fn diff<T: Float>(v: &[T]) -> Vec<T> {
    v.windows(2).map(|w| w[1] - w[0]).collect()
}

/// First differences down the rows of a matrix.
///
/// An `m x d` input yields an `(m - 1) x d` output (empty when `m < 2`).
pub fn diff_rows<T: Float>(a: &Array2<T>) -> Array2<T> {
    let m = a.nrows();
    if m < 2 {
        return Array2::zeros((0, a.ncols()));
    }
    &a.slice(s![1.., ..]) - &a.slice(s![..m - 1, ..])
}

/// Surround a matrix with one zero row above and one below.
pub fn pad_rows<T: Float>(a: &Array2<T>) -> Array2<T> {
    let (m, d) = a.dim();
    let mut out = Array2::zeros((m + 2, d));
    out.slice_mut(s![1..m + 1, ..]).assign(a);
    out
}

/// Divide row `i` of a matrix by `h[i]`.
pub fn div_rows<T: Float>(mut a: Array2<T>, h: &[T]) -> Array2<T> {
    debug_assert_eq!(a.nrows(), h.len());
    for (mut row, &hi) in a.rows_mut().into_iter().zip(h.iter()) {
        row.mapv_inplace(|v| v / hi);
    }
    a
}
