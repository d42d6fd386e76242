//! Effective degrees of freedom of a fitted smoothing spline.
//!
//! ## Purpose
//!
//! This module computes the trace of the smoother ("hat") matrix that maps
//! the observations to the smoothed values at the sites:
//!
//! ```text
//! S   = p W^-1 + 6 (1 - p) Qt^T R^-1 Qt
//! dof = p * trace(S^-1 W^-1)
//! ```
//!
//! where `W^-1 = diag(1/w)`.
//!
//! ## Design notes
//!
//! * `R^-1 Qt` is obtained with the banded solver, one column of `Qt` per
//!   right-hand side, so `R` is never inverted explicitly.
//! * `S` is dense, so the inverse costs O(n^3) time and O(n^2) memory. This is
//!   why the computation is opt-in.
//!
//! ## Key concepts
//!
//! * `p = 1` reproduces the data exactly and gives `dof = n`.
//! * `p = 0` collapses to the least-squares line, whose hat matrix has trace 2.
//!   `S` is singular there, so the limit is returned directly.
//!
//! ## Non-goals
//!
//! * This module does not estimate variances or confidence bands.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::SplineSystem;
use crate::math::linalg::{invert_dense, solve_banded};
use crate::primitives::errors::CsapsError;

/// Degrees of freedom of a straight-line fit.
pub const LINEAR_DOF: f64 = 2.0;

/// Effective degrees of freedom for smoothing parameter `p`.
pub fn degrees_of_freedom<T: Float + 'static>(
    system: &SplineSystem<T>,
    w: &[T],
    p: T,
) -> Result<T, CsapsError> {
    if p == T::zero() {
        return Ok(T::from(LINEAR_DOF).unwrap());
    }

    let n = system.size();
    let pp = T::from(6.0).unwrap() * (T::one() - p);

    // Qt^T R^-1 Qt, n x n
    let r_inv_qt = solve_banded(&system.r, &system.qt.to_dense())?;
    let mut s = system.qt.transpose().mul_dense(&r_inv_qt);
    s.mapv_inplace(|v| pp * v);
    for i in 0..n {
        s[[i, i]] = s[[i, i]] + p / w[i];
    }

    let s_inv = invert_dense(&s)?;
    let trace = (0..n).fold(T::zero(), |acc, i| acc + s_inv[[i, i]] / w[i]);

    Ok(p * trace)
}
