//! Piecewise polynomial representation and evaluation.
//!
//! ## Purpose
//!
//! This module stores a spline as breakpoints plus a coefficient tensor and
//! evaluates it, or one of its derivatives, at arbitrary query points.
//!
//! ## Design notes
//!
//! * **Coefficient layout**: `coeffs` has shape `(order, pieces, trailing...)`
//!   with the highest power first. Piece `i` at query `x` evaluates
//!   `sum_j coeffs[j, i, ..] * (x - breaks[i])^(order - 1 - j)`.
//! * **Axis**: The sample axis tells where the query dimension is placed in the
//!   output; the trailing coefficient dimensions fill the remaining positions
//!   in order.
//! * **Interval search**: Binary search seeded with the previous interval,
//!   which makes sorted queries close to linear.
//!
//! ## Key concepts
//!
//! * **Half-open intervals**: `[breaks[i], breaks[i+1])`, except the last interval
//!   which is closed on the right.
//! * **Extrapolation**: Out-of-domain queries are either `NaN`, evaluated on the
//!   nearest boundary piece, or wrapped into the domain periodically.
//!
//! ## Invariants
//!
//! * `breaks.len() == pieces + 1` and breaks are strictly increasing.
//! * Derived metadata (order, pieces, shape) is computed from the stored
//!   arrays, never cached separately.
//! * `NaN` queries evaluate to `NaN`.
//!
//! ## Non-goals
//!
//! * This module does not integrate, find roots or construct polynomials from
//!   data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::{format, vec::Vec};

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::spacings;
use crate::primitives::errors::CsapsError;

// ============================================================================
// Extrapolation Mode
// ============================================================================

/// Behaviour for query points outside `[breaks[0], breaks[last]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Out-of-domain points evaluate to `NaN`.
    Disabled,

    /// Extend the first and last pieces beyond the domain.
    #[default]
    Boundary,

    /// Wrap queries into the domain with period `breaks[last] - breaks[0]`.
    Periodic,
}

// ============================================================================
// Piecewise Polynomial
// ============================================================================

/// Breakpoints and per-piece polynomial coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial<T> {
    breaks: Vec<T>,
    coeffs: ArrayD<T>,
    axis: usize,
}

impl<T: Float> PiecewisePolynomial<T> {
    /// Create a piecewise polynomial from breakpoints and coefficients.
    ///
    /// `axis` is the position of the sample axis in the data shape and must
    /// be at most the number of trailing coefficient dimensions.
    pub fn new(breaks: Vec<T>, coeffs: ArrayD<T>, axis: usize) -> Result<Self, CsapsError> {
        if coeffs.ndim() < 2 {
            return Err(CsapsError::InvalidInput(format!(
                "coefficients must have at least 2 dimensions, got {}",
                coeffs.ndim()
            )));
        }
        let (order, pieces) = (coeffs.shape()[0], coeffs.shape()[1]);
        if order == 0 || pieces == 0 {
            return Err(CsapsError::InvalidInput(
                "coefficients must have at least one order and one piece".into(),
            ));
        }
        if breaks.len() != pieces + 1 {
            return Err(CsapsError::LengthMismatch {
                name: "breaks",
                expected: pieces + 1,
                got: breaks.len(),
            });
        }
        if breaks.iter().any(|b| !b.is_finite()) {
            return Err(CsapsError::InvalidNumericValue(
                "breaks must be finite".into(),
            ));
        }
        spacings(&breaks)?;

        let data_ndim = coeffs.ndim() - 1;
        if axis >= data_ndim {
            return Err(CsapsError::InvalidAxis {
                axis: axis as isize,
                ndim: data_ndim,
            });
        }

        let coeffs = if coeffs.is_standard_layout() {
            coeffs
        } else {
            coeffs.as_standard_layout().into_owned()
        };

        Ok(Self {
            breaks,
            coeffs,
            axis,
        })
    }

    /// Breakpoints (the data sites).
    #[inline]
    pub fn breaks(&self) -> &[T] {
        &self.breaks
    }

    /// Coefficient tensor of shape `(order, pieces, trailing...)`.
    #[inline]
    pub fn coeffs(&self) -> &ArrayD<T> {
        &self.coeffs
    }

    /// Polynomial order (degree + 1).
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.shape()[0]
    }

    /// Number of polynomial pieces.
    #[inline]
    pub fn pieces(&self) -> usize {
        self.coeffs.shape()[1]
    }

    /// Sample axis of the data shape.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Number of channels: the product of the data shape without the sample axis.
    pub fn ndim(&self) -> usize {
        self.coeffs.shape()[2..].iter().product()
    }

    /// Data shape, i.e. the trailing shape with `pieces + 1` at the sample axis.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape: Vec<usize> = self.coeffs.shape()[2..].to_vec();
        shape.insert(self.axis, self.pieces() + 1);
        shape
    }

    /// Evaluate the `nu`-th derivative at every query point.
    ///
    /// The result has the data shape with the sample axis replaced by the
    /// number of query points.
    pub fn evaluate(&self, xi: &[T], nu: usize, extrapolate: Extrapolate) -> ArrayD<T> {
        let trailing = &self.coeffs.shape()[2..];
        let channels = self.ndim();
        let order = self.order();
        let pieces = self.pieces();

        let mut shape = Vec::with_capacity(trailing.len() + 1);
        shape.push(xi.len());
        shape.extend_from_slice(trailing);
        let mut out = ArrayD::<T>::zeros(IxDyn(&shape));

        // Coefficient tensor viewed as [order][pieces][channels] in row-major order
        let flat: Vec<T> = self.coeffs.iter().copied().collect();
        let at = |j: usize, i: usize, c: usize| flat[(j * pieces + i) * channels + c];

        let factors = derivative_factors::<T>(order, nu);
        let first = self.breaks[0];
        let last = self.breaks[pieces];
        let period = last - first;

        let mut hint = 0;
        {
            let mut values = out.iter_mut();
            for &x in xi {
                let x = match extrapolate {
                    Extrapolate::Periodic => wrap_periodic(x, first, period),
                    _ => x,
                };
                let interval =
                    find_interval(&self.breaks, x, hint, extrapolate != Extrapolate::Disabled);

                for c in 0..channels {
                    let value = match interval {
                        Some(i) => {
                            let t = x - self.breaks[i];
                            let mut acc = T::zero();
                            for (j, &f) in factors.iter().enumerate() {
                                acc = acc * t + at(j, i, c) * f;
                            }
                            acc
                        }
                        None => T::nan(),
                    };
                    if let Some(slot) = values.next() {
                        *slot = value;
                    }
                }

                if let Some(i) = interval {
                    hint = i;
                }
            }
        }

        if self.axis == 0 {
            return out;
        }
        let mut perm: Vec<usize> = (1..shape.len()).collect();
        perm.insert(self.axis, 0);
        out.permuted_axes(IxDyn(&perm))
            .as_standard_layout()
            .into_owned()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Multipliers for the surviving coefficients of the `nu`-th derivative.
///
/// Entry `j` multiplies `coeffs[j]`, whose power `k = order - 1 - j` drops to
/// `k - nu`; the factor is the falling factorial `k! / (k - nu)!`.
fn derivative_factors<T: Float>(order: usize, nu: usize) -> Vec<T> {
    if nu >= order {
        return Vec::new();
    }
    (0..order - nu)
        .map(|j| {
            let k = order - 1 - j;
            (k - nu + 1..=k).fold(T::one(), |acc, m| acc * T::from(m).unwrap())
        })
        .collect()
}

/// Map `x` into `[first, first + period)`.
fn wrap_periodic<T: Float>(x: T, first: T, period: T) -> T {
    let r = (x - first) % period;
    if r < T::zero() {
        first + r + period
    } else {
        first + r
    }
}

/// Index of the piece containing `x`, or `None` when it is out of the domain
/// and extrapolation is off.
pub fn find_interval<T: Float>(
    breaks: &[T],
    x: T,
    hint: usize,
    extrapolate: bool,
) -> Option<usize> {
    let n = breaks.len();
    if x.is_nan() || n < 2 {
        return None;
    }
    if x < breaks[0] {
        return extrapolate.then_some(0);
    }
    if x > breaks[n - 1] {
        return extrapolate.then_some(n - 2);
    }
    if x == breaks[n - 1] {
        return Some(n - 2);
    }

    if hint < n - 1 && breaks[hint] <= x && x < breaks[hint + 1] {
        return Some(hint);
    }

    let (mut lo, mut hi) = (0, n - 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if x < breaks[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(lo)
}
