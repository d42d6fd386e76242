//! Penalized system solve and piecewise-cubic coefficient reconstruction.
//!
//! ## Purpose
//!
//! This module solves `(6 (1 - p) QtW + p R) U = diff(dy/dx)` for the scaled
//! second derivatives at the interior sites and converts them, together with
//! the smoothed values at the sites, into per-segment polynomial coefficients.
//!
//! ## Design notes
//!
//! * **Layout**: Observations arrive as a `d x n` matrix (one row per channel);
//!   the solve works on `n x d` matrices so that all channels share one
//!   factorization.
//! * **Natural boundary**: Second derivatives at both end sites are zero, which is
//!   expressed by zero-padding `U` with one row on each side.
//! * **Coefficient order**: Highest power first, i.e. for segment `i` and local
//!   offset `t = x - x[i]`: `c[0] t^3 + c[1] t^2 + c[2] t + c[3]`.
//!
//! ## Invariants
//!
//! * The coefficient tensor has shape `(order, n - 1, d)`.
//! * Two sites give an order-2 (linear) tensor and force `p = 1`.
//!
//! ## Non-goals
//!
//! * This module does not reshape channels back to the caller's data shape.

// External dependencies
use ndarray::{s, Array2, Array3, Axis};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::SplineSystem;
use crate::math::finite_diff::{diff_rows, div_rows, pad_rows};
use crate::math::linalg::solve_banded;
use crate::primitives::errors::CsapsError;

/// Polynomial order of the cubic pieces.
pub const CUBIC_ORDER: usize = 4;

/// Polynomial order of the two-site degenerate fit.
pub const LINEAR_ORDER: usize = 2;

// ============================================================================
// Degenerate Case
// ============================================================================

/// Coefficients of the straight line through two sites.
///
/// Returns a `(2, 1, d)` tensor holding `[slope, y0]` per channel.
pub fn linear_coefficients<T: Float>(x: &[T], y: &Array2<T>) -> Array3<T> {
    debug_assert_eq!(x.len(), 2);
    let d = y.nrows();
    let h = x[1] - x[0];
    let mut coeffs = Array3::zeros((LINEAR_ORDER, 1, d));
    for c in 0..d {
        coeffs[[0, 0, c]] = (y[[c, 1]] - y[[c, 0]]) / h;
        coeffs[[1, 0, c]] = y[[c, 0]];
    }
    coeffs
}

// ============================================================================
// Cubic Solve
// ============================================================================

/// Solve the penalized system for smoothing parameter `p`.
///
/// `y` is `d x n` and `w` has length `n`; the result is a `(4, n - 1, d)` tensor.
pub fn solve_cubic<T: Float + 'static>(
    system: &SplineSystem<T>,
    y: &Array2<T>,
    w: &[T],
    p: T,
) -> Result<Array3<T>, CsapsError> {
    let n = system.size();
    let d = y.nrows();
    let dx = &system.dx;
    let pp = T::from(6.0).unwrap() * (T::one() - p);

    // Right-hand side: second differences of the divided differences
    let yt = y.t().to_owned();
    let dy_dx = div_rows(diff_rows(&yt), dx);
    let b = diff_rows(&dy_dx);

    let a = system.penalized(p);
    let u = solve_banded(&a, &b)?;

    // Smoothing correction terms
    let d1 = div_rows(diff_rows(&pad_rows(&u)), dx);
    let d2 = diff_rows(&pad_rows(&d1));

    // Smoothed values at the sites
    let mut yi = yt;
    for (k, mut row) in yi.axis_iter_mut(Axis(0)).enumerate() {
        let scale = pp / w[k];
        for (c, v) in row.iter_mut().enumerate() {
            *v = *v - scale * d2[[k, c]];
        }
    }

    let pu = pad_rows(&u.mapv(|v| p * v));
    let pu_lo = pu.slice(s![..n - 1, ..]);
    let pu_hi = pu.slice(s![1.., ..]);

    let three = T::from(3.0).unwrap();
    let two = T::from(2.0).unwrap();

    let c1 = div_rows(diff_rows(&pu), dx);
    let c2 = pu_lo.mapv(|v| three * v);
    let mut c3 = div_rows(diff_rows(&yi), dx);
    for i in 0..n - 1 {
        for c in 0..d {
            c3[[i, c]] = c3[[i, c]] - dx[i] * (two * pu_lo[[i, c]] + pu_hi[[i, c]]);
        }
    }
    let c4 = yi.slice(s![..n - 1, ..]);

    let mut coeffs = Array3::zeros((CUBIC_ORDER, n - 1, d));
    coeffs.index_axis_mut(Axis(0), 0).assign(&c1);
    coeffs.index_axis_mut(Axis(0), 1).assign(&c2);
    coeffs.index_axis_mut(Axis(0), 2).assign(&c3);
    coeffs.index_axis_mut(Axis(0), 3).assign(&c4);

    Ok(coeffs)
}
