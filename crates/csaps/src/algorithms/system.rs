//! Sparse system assembly for the smoothing spline.
//!
//! ## Purpose
//!
//! This module builds the banded matrices of the penalized least-squares
//! problem from the site spacings and the weights:
//!
//! ```text
//! R   = tridiag(dx[i+1], 2 (dx[i] + dx[i+1]), dx[i+1])        (n-2) x (n-2)
//! Qt  = [1/dx[i], -(1/dx[i] + 1/dx[i+1]), 1/dx[i+1]] at i..i+2  (n-2) x n
//! QtW = Qt diag(1/w) Qt^T                                       (n-2) x (n-2)
//! ```
//!
//! `R` is the second-derivative continuity matrix of a natural cubic spline,
//! `Qt` maps function values to second-derivative constraints and `QtW` is
//! the weighted roughness penalty.
//!
//! ## Invariants
//!
//! * Sites are strictly increasing (`dx[i] > 0`) and weights are positive.
//! * `R` has bands `{-1, 0, 1}`, `Qt` bands `{0, 1, 2}`, `QtW` bands `{-2..=2}`.
//! * Assembly is O(n) in time and memory.
//!
//! ## Non-goals
//!
//! * This module does not choose the smoothing parameter or solve the system.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::finite_diff::diff;
use crate::primitives::banded::BandedMatrix;
use crate::primitives::errors::CsapsError;

// ============================================================================
// Spacings
// ============================================================================

/// Site spacings `dx[i] = x[i + 1] - x[i]`, rejecting non-increasing sites.
pub fn spacings<T: Float>(x: &[T]) -> Result<Vec<T>, CsapsError> {
    let dx = diff(x);
    if let Some(index) = dx.iter().position(|&h| !(h > T::zero())) {
        return Err(CsapsError::NotIncreasing { index });
    }
    Ok(dx)
}

// ============================================================================
// Spline System
// ============================================================================

/// The banded matrices shared by the solver and the degrees-of-freedom estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSystem<T> {
    /// Site spacings (length `n - 1`).
    pub dx: Vec<T>,

    /// Second-derivative continuity matrix, `(n-2) x (n-2)`.
    pub r: BandedMatrix<T>,

    /// Second-difference operator, `(n-2) x n`.
    pub qt: BandedMatrix<T>,

    /// Weighted roughness penalty `Qt diag(1/w) Qt^T`, `(n-2) x (n-2)`.
    pub qtw: BandedMatrix<T>,
}

impl<T: Float> SplineSystem<T> {
    /// Build the system for sites `x` and weights `w` (`n >= 3`).
    pub fn build(x: &[T], w: &[T]) -> Result<Self, CsapsError> {
        let n = x.len();
        if n < 3 {
            return Err(CsapsError::TooFewPoints { got: n, min: 3 });
        }
        if w.len() != n {
            return Err(CsapsError::LengthMismatch {
                name: "weights",
                expected: n,
                got: w.len(),
            });
        }
        let dx = spacings(x)?;
        if let Some(i) = w.iter().position(|&wi| !(wi > T::zero())) {
            return Err(CsapsError::SingularSystem(format!(
                "weights must be positive (weights[{i}] is not)"
            )));
        }

        let m = n - 2;
        let two = T::from(2.0).unwrap();

        let mut r = BandedMatrix::zeros(m, m, &[-1, 0, 1]);
        for i in 0..m {
            r.set(i, i, two * (dx[i] + dx[i + 1]));
            if i + 1 < m {
                r.set(i, i + 1, dx[i + 1]);
                r.set(i + 1, i, dx[i + 1]);
            }
        }

        let mut qt = BandedMatrix::zeros(m, n, &[0, 1, 2]);
        for i in 0..m {
            let a = dx[i].recip();
            let b = dx[i + 1].recip();
            qt.set(i, i, a);
            qt.set(i, i + 1, -(a + b));
            qt.set(i, i + 2, b);
        }

        let sqrt_w_recip: Vec<T> = w.iter().map(|&wi| wi.sqrt().recip()).collect();
        let qtw_half = qt.scale_columns(&sqrt_w_recip);
        let qtw = qtw_half.matmul(&qtw_half.transpose());

        Ok(Self { dx, r, qt, qtw })
    }

    /// Number of data sites.
    #[inline]
    pub fn size(&self) -> usize {
        self.dx.len() + 1
    }

    /// Assemble the penalized matrix `6 (1 - p) QtW + p R`.
    pub fn penalized(&self, p: T) -> BandedMatrix<T> {
        let pp = T::from(6.0).unwrap() * (T::one() - p);
        BandedMatrix::linear_combination(pp, &self.qtw, p, &self.r)
    }
}
