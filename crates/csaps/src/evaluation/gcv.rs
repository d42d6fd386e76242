//! Generalized cross-validation score.
//!
//! ## Purpose
//!
//! This module scores a fit from its residuals and effective degrees of
//! freedom without holding out data:
//!
//! ```text
//! gcv = ||y - y_pred||^2 / (n - dof)^2
//! ```
//!
//! where `n` is the number of compared values.
//!
//! ## Invariants
//!
//! * The score is only defined when the degrees of freedom are known.
//! * `y` and `y_pred` must have identical shapes.
//! * The score is non-negative; it grows without bound as `dof` approaches `n`.
//!
//! ## Non-goals
//!
//! * This module does not search the smoothing parameter for the minimum score.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "std")]
use std::format;

// External dependencies
use ndarray::ArrayViewD;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CsapsError;

/// Residual sum of squares between two arrays of the same shape.
pub fn residual_sum_of_squares<T: Float>(
    y: &ArrayViewD<'_, T>,
    y_pred: &ArrayViewD<'_, T>,
) -> Result<T, CsapsError> {
    if y.shape() != y_pred.shape() {
        return Err(CsapsError::InvalidInput(format!(
            "observed values have shape {:?} but predictions have shape {:?}",
            y.shape(),
            y_pred.shape()
        )));
    }
    Ok(y.iter()
        .zip(y_pred.iter())
        .fold(T::zero(), |acc, (&a, &b)| {
            let r = a - b;
            acc + r * r
        }))
}

/// Compute the GCV score, failing when `dof` is absent.
pub fn compute_gcv<T: Float>(
    y: &ArrayViewD<'_, T>,
    y_pred: &ArrayViewD<'_, T>,
    dof: Option<T>,
) -> Result<T, CsapsError> {
    let dof = dof.ok_or(CsapsError::MissingDegreesOfFreedom)?;
    let rss = residual_sum_of_squares(y, y_pred)?;
    let n = T::from(y.len()).unwrap();
    let denom = n - dof;
    Ok(rss / (denom * denom))
}
