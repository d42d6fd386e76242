//! Fitted cubic smoothing spline.
//!
//! ## Purpose
//!
//! This module defines `CubicSmoothingSpline`, the result of a fit. It owns
//! the piecewise polynomial together with the smoothing parameter that was
//! used, the optional degrees of freedom and the last GCV score.
//!
//! ## Design notes
//!
//! * **Composition**: Evaluation is delegated to [`PiecewisePolynomial`]; the
//!   spline adds fit metadata on top.
//! * **Settable-once fields**: `degrees_of_freedom` is fixed at construction.
//!   `gcv` is written by [`CubicSmoothingSpline::compute_gcv`], which takes
//!   `&mut self`, so a shared spline can be evaluated from many threads while
//!   scoring needs exclusive access.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `smooth` lies in `[0, 1]`.
//! * `gcv` is `None` until a score has been computed successfully.
//!
//! ## Non-goals
//!
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use log::trace;
use ndarray::ArrayD;
use num_traits::Float;

// Internal dependencies
use crate::evaluation::gcv::compute_gcv;
use crate::evaluation::ppoly::{Extrapolate, PiecewisePolynomial};
use crate::primitives::errors::CsapsError;
use crate::primitives::input::{ArrayInput, VectorInput};

// ============================================================================
// Spline Structure
// ============================================================================

/// A fitted cubic smoothing spline.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSmoothingSpline<T> {
    spline: PiecewisePolynomial<T>,
    smooth: T,
    degrees_of_freedom: Option<T>,
    gcv: Option<T>,
}

impl<T: Float> CubicSmoothingSpline<T> {
    /// Assemble a spline from its parts.
    pub fn new(spline: PiecewisePolynomial<T>, smooth: T, degrees_of_freedom: Option<T>) -> Self {
        Self {
            spline,
            smooth,
            degrees_of_freedom,
            gcv: None,
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the spline at `xi`, extrapolating from the boundary pieces.
    pub fn evaluate<X>(&self, xi: &X) -> core::result::Result<ArrayD<T>, CsapsError>
    where
        X: VectorInput<T> + ?Sized,
    {
        self.evaluate_with(xi, 0, Extrapolate::default())
    }

    /// Evaluate the `nu`-th derivative at `xi`.
    pub fn derivative<X>(&self, xi: &X, nu: usize) -> core::result::Result<ArrayD<T>, CsapsError>
    where
        X: VectorInput<T> + ?Sized,
    {
        self.evaluate_with(xi, nu, Extrapolate::default())
    }

    /// Evaluate the `nu`-th derivative at `xi` with explicit extrapolation.
    pub fn evaluate_with<X>(
        &self,
        xi: &X,
        nu: usize,
        extrapolate: Extrapolate,
    ) -> core::result::Result<ArrayD<T>, CsapsError>
    where
        X: VectorInput<T> + ?Sized,
    {
        let xi = xi.to_vector("xi")?;
        Ok(self.spline.evaluate(&xi, nu, extrapolate))
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Compute and store the generalized cross-validation score.
    ///
    /// Fails with [`CsapsError::MissingDegreesOfFreedom`] unless the spline was
    /// fitted with degrees-of-freedom computation enabled. Each call recomputes
    /// the score and overwrites the stored value.
    pub fn compute_gcv<Y, P>(&mut self, y: &Y, y_pred: &P) -> core::result::Result<T, CsapsError>
    where
        Y: ArrayInput<T> + ?Sized,
        P: ArrayInput<T> + ?Sized,
    {
        let gcv = compute_gcv(
            &y.as_array_view(),
            &y_pred.as_array_view(),
            self.degrees_of_freedom,
        )?;
        trace!("csaps: gcv = {}", gcv.to_f64().unwrap_or(f64::NAN));
        self.gcv = Some(gcv);
        Ok(gcv)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// The underlying piecewise polynomial.
    pub fn spline(&self) -> &PiecewisePolynomial<T> {
        &self.spline
    }

    /// Smoothing parameter used for the fit.
    pub fn smooth(&self) -> T {
        self.smooth
    }

    /// Effective degrees of freedom, if computed at fit time.
    pub fn degrees_of_freedom(&self) -> Option<T> {
        self.degrees_of_freedom
    }

    /// Last computed GCV score.
    pub fn gcv(&self) -> Option<T> {
        self.gcv
    }

    /// Breakpoints (the data sites), ascending.
    pub fn breaks(&self) -> &[T] {
        self.spline.breaks()
    }

    /// Coefficient tensor of shape `(order, pieces, trailing...)`, highest power first.
    pub fn coeffs(&self) -> &ArrayD<T> {
        self.spline.coeffs()
    }

    /// Polynomial order of each piece.
    pub fn order(&self) -> usize {
        self.spline.order()
    }

    /// Number of polynomial pieces.
    pub fn pieces(&self) -> usize {
        self.spline.pieces()
    }

    /// Number of channels.
    pub fn ndim(&self) -> usize {
        self.spline.ndim()
    }

    /// Shape of the data the spline was fitted to.
    pub fn shape(&self) -> Vec<usize> {
        self.spline.shape()
    }

    /// Axis of the fitted data that holds the samples.
    pub fn axis(&self) -> usize {
        self.spline.axis()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for CubicSmoothingSpline<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "CubicSmoothingSpline")?;
        writeln!(f, "  breaks: {:?}", self.breaks())?;
        writeln!(f, "  coeffs shape: {:?}", self.coeffs().shape())?;
        writeln!(f, "  data shape: {:?}", self.shape())?;
        writeln!(f, "  axis: {}", self.axis())?;
        writeln!(f, "  pieces: {}", self.pieces())?;
        writeln!(f, "  order: {}", self.order())?;
        writeln!(f, "  ndim: {}", self.ndim())?;
        writeln!(f, "  smooth: {}", self.smooth)?;

        match self.degrees_of_freedom {
            Some(dof) => writeln!(f, "  degrees of freedom: {}", dof)?,
            None => writeln!(f, "  degrees of freedom: None")?,
        }
        match self.gcv {
            Some(gcv) => writeln!(f, "  gcv: {}", gcv)?,
            None => writeln!(f, "  gcv: None")?,
        }

        Ok(())
    }
}
