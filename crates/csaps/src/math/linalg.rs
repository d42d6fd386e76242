//! Direct linear solvers.
//!
//! ## Purpose
//!
//! This module solves the linear systems that arise while fitting a
//! smoothing spline:
//! - A banded LU solve for the penalized system (linear in the number of sites).
//! - A dense Gauss-Jordan inverse for the degrees-of-freedom matrix.
//!
//! ## Design notes
//!
//! * **No pivoting in the banded solve**: The penalized matrix is symmetric
//!   positive definite for positive weights, so elimination in band order is
//!   stable and never fills outside the band.
//! * **Partial pivoting in the dense inverse**: The composed matrix is not banded
//!   and only known to be nonsingular.
//! * **Singularity**: A pivot below `epsilon * max|a_ij| * n` (or a non-finite
//!   pivot) is reported as [`CsapsError::SingularSystem`].
//!
//! ## Invariants
//!
//! * Banded solve: O(n * (l + u) * (u + m)) time for bandwidths `l`, `u` and `m`
//!   right-hand sides; O(n * (l + u)) extra memory.
//! * Dense inverse: O(n^3) time, O(n^2) memory.
//!
//! ## Non-goals
//!
//! * This module does not provide iterative or sparse-general solvers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec};
#[cfg(feature = "std")]
use std::{format, vec};

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// Internal dependencies
use crate::primitives::banded::BandedMatrix;
use crate::primitives::errors::CsapsError;

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn pivot_tolerance<T: Float>(scale: T, n: usize) -> T {
    T::epsilon() * scale * T::from(n.max(1)).unwrap_or_else(T::one)
}

#[inline]
fn is_singular_pivot<T: Float>(pivot: T, tol: T) -> bool {
    !pivot.is_finite() || pivot.abs() <= tol
}

// ============================================================================
// Banded LU Solve
// ============================================================================

/// Solve `A * X = B` for a square banded `A` and dense right-hand sides `B`.
pub fn solve_banded<T: Float>(a: &BandedMatrix<T>, b: &Array2<T>) -> Result<Array2<T>, CsapsError> {
    let n = a.rows();
    if a.cols() != n {
        return Err(CsapsError::InvalidInput(format!(
            "banded solve requires a square matrix, got {}x{}",
            n,
            a.cols()
        )));
    }
    if b.nrows() != n {
        return Err(CsapsError::InvalidInput(format!(
            "right-hand side has {} rows, expected {}",
            b.nrows(),
            n
        )));
    }
    if !a.is_finite() {
        return Err(CsapsError::SingularSystem(
            "system matrix contains non-finite entries".into(),
        ));
    }

    let l = a.lower_bandwidth();
    let u = a.upper_bandwidth();
    let width = l + u + 1;

    // Compact band storage: (i, j) lives at lu[i * width + (j + l - i)].
    let mut lu = vec![T::zero(); n * width];
    for i in 0..n {
        for (j, v) in a.row(i) {
            lu[i * width + (j + l - i)] = v;
        }
    }
    let at = |i: usize, j: usize| i * width + (j + l - i);

    let tol = pivot_tolerance(a.max_abs(), n);
    if tol <= T::zero() && n > 0 {
        return Err(CsapsError::SingularSystem("system matrix is zero".into()));
    }

    // Factorization
    for k in 0..n {
        let pivot = lu[at(k, k)];
        if is_singular_pivot(pivot, tol) {
            return Err(CsapsError::SingularSystem(format!(
                "zero pivot at row {k} of the banded system"
            )));
        }
        let row_end = (k + l).min(n - 1);
        let col_end = (k + u).min(n - 1);
        for i in (k + 1)..=row_end {
            let factor = lu[at(i, k)] / pivot;
            lu[at(i, k)] = factor;
            if factor == T::zero() {
                continue;
            }
            for j in (k + 1)..=col_end {
                lu[at(i, j)] = lu[at(i, j)] - factor * lu[at(k, j)];
            }
        }
    }

    // Substitution, one right-hand side at a time
    let mut x = b.to_owned();
    for c in 0..x.ncols() {
        for i in 0..n {
            let start = i.saturating_sub(l);
            let mut acc = x[[i, c]];
            for j in start..i {
                acc = acc - lu[at(i, j)] * x[[j, c]];
            }
            x[[i, c]] = acc;
        }
        for i in (0..n).rev() {
            let end = (i + u).min(n - 1);
            let mut acc = x[[i, c]];
            for j in (i + 1)..=end {
                acc = acc - lu[at(i, j)] * x[[j, c]];
            }
            x[[i, c]] = acc / lu[at(i, i)];
        }
    }

    Ok(x)
}

// ============================================================================
// Dense Inverse
// ============================================================================

/// Invert a dense square matrix by Gauss-Jordan elimination with partial pivoting.
pub fn invert_dense<T: Float>(a: &Array2<T>) -> Result<Array2<T>, CsapsError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(CsapsError::InvalidInput(format!(
            "inverse requires a square matrix, got {}x{}",
            n,
            a.ncols()
        )));
    }
    if a.iter().any(|v| !v.is_finite()) {
        return Err(CsapsError::SingularSystem(
            "matrix contains non-finite entries".into(),
        ));
    }

    let scale = a.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
    let tol = pivot_tolerance(scale, n);

    let mut m = a.to_owned();
    let mut inv = Array2::<T>::zeros((n, n));
    for i in 0..n {
        inv[[i, i]] = T::one();
    }

    for k in 0..n {
        // Partial pivot
        let mut p = k;
        let mut best = m[[k, k]].abs();
        for i in (k + 1)..n {
            let v = m[[i, k]].abs();
            if v > best {
                best = v;
                p = i;
            }
        }
        if is_singular_pivot(best, tol) {
            return Err(CsapsError::SingularSystem(format!(
                "matrix is singular (column {k})"
            )));
        }
        if p != k {
            for j in 0..n {
                m.swap([k, j], [p, j]);
                inv.swap([k, j], [p, j]);
            }
        }

        let pivot = m[[k, k]];
        for j in 0..n {
            m[[k, j]] = m[[k, j]] / pivot;
            inv[[k, j]] = inv[[k, j]] / pivot;
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = m[[i, k]];
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                m[[i, j]] = m[[i, j]] - factor * m[[k, j]];
                inv[[i, j]] = inv[[i, j]] - factor * inv[[k, j]];
            }
        }
    }

    Ok(inv)
}
