//! Data preparation for smoothing spline fitting.
//!
//! ## Purpose
//!
//! This module converts raw inputs into the canonical arrays used by the
//! algorithms layer: sites as a vector, observations as a `d x n` matrix
//! (one row per channel) and weights as a vector of length `n`. It keeps the
//! trailing data shape and the resolved sample axis so that coefficients can
//! be reshaped back afterwards.
//!
//! ## Design notes
//!
//! * **Axis handling**: Negative axes count from the end (`-1` is the last axis).
//! * **Flattening**: The sample axis is moved to the front and the remaining
//!   axes are flattened in row-major order, so channel `c` is the `c`-th entry
//!   of the trailing shape in C order.
//!
//! ## Invariants
//!
//! * `y.ncols() == x.len() == w.len()`.
//! * `y.nrows()` equals the product of `trailing_shape`.
//!
//! ## Non-goals
//!
//! * This module does not check that sites are increasing (see
//!   `algorithms::system`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use ndarray::{Array2, Array3, ArrayD, ArrayViewD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::CsapsError;

// ============================================================================
// Prepared Data
// ============================================================================

/// Canonical fitting inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData<T> {
    /// Data sites.
    pub x: Vec<T>,

    /// Observations, `d x n`.
    pub y: Array2<T>,

    /// Weights, all ones when not supplied.
    pub w: Vec<T>,

    /// Shape of the observations without the sample axis.
    pub trailing_shape: Vec<usize>,

    /// Non-negative sample axis.
    pub axis: usize,
}

/// Resolve a possibly negative axis against `ndim` dimensions.
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize, CsapsError> {
    let resolved = if axis < 0 { ndim as isize + axis } else { axis };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(CsapsError::InvalidAxis { axis, ndim });
    }
    Ok(resolved as usize)
}

impl<T: Float> PreparedData<T> {
    /// Validate and normalize sites, observations and optional weights.
    pub fn new(
        x: Vec<T>,
        y: ArrayViewD<'_, T>,
        w: Option<Vec<T>>,
        axis: isize,
    ) -> Result<Self, CsapsError> {
        Validator::validate_sites(&x)?;
        let n = x.len();

        if y.ndim() == 0 {
            return Err(CsapsError::InvalidInput(
                "observations must have at least one dimension".into(),
            ));
        }
        let axis = normalize_axis(axis, y.ndim())?;
        if y.shape()[axis] != n {
            return Err(CsapsError::LengthMismatch {
                name: "observations",
                expected: n,
                got: y.shape()[axis],
            });
        }

        let w = match w {
            Some(w) => {
                Validator::validate_weights(&w, n)?;
                w
            }
            None => vec![T::one(); n],
        };

        let mut trailing_shape = y.shape().to_vec();
        trailing_shape.remove(axis);
        let d: usize = trailing_shape.iter().product();

        // Move the sample axis to the front, then read in logical order
        let mut perm: Vec<usize> = (0..y.ndim()).filter(|&a| a != axis).collect();
        perm.insert(0, axis);
        let moved = y.permuted_axes(IxDyn(&perm));

        let mut y2 = Array2::zeros((d, n));
        for (k, &v) in moved.iter().enumerate() {
            y2[[k % d, k / d]] = v;
        }

        Ok(Self {
            x,
            y: y2,
            w,
            trailing_shape,
            axis,
        })
    }
}

/// Reshape a `(order, pieces, d)` tensor to `(order, pieces, trailing...)`.
pub fn restore_shape<T: Float>(coeffs: &Array3<T>, trailing_shape: &[usize]) -> ArrayD<T> {
    let (order, pieces, _) = coeffs.dim();
    let mut shape = Vec::with_capacity(trailing_shape.len() + 2);
    shape.push(order);
    shape.push(pieces);
    shape.extend_from_slice(trailing_shape);

    let mut out = ArrayD::zeros(IxDyn(&shape));
    for (dst, &src) in out.iter_mut().zip(coeffs.iter()) {
        *dst = src;
    }
    out
}
