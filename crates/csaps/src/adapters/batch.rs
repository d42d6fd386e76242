//! Batch adapter for cubic smoothing spline fitting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It fits complete
//! datasets held in memory in one pass and returns a fitted
//! [`CubicSmoothingSpline`].
//!
//! ## Design notes
//!
//! * **Processing**: Validates, prepares, executes and reshapes in one call.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reuse**: The built processor is immutable and can fit many datasets.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Deferred Validation**: Parameters are checked by `build()`.
//!
//! ## Invariants
//!
//! * Sites are strictly increasing and finite; at least 2 are required.
//! * The observation length along the sample axis equals the number of sites.
//!
//! ## Non-goals
//!
//! * This adapter does not sort unsorted sites.
//! * This adapter does not fit incrementally.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CsapsConfig, CsapsExecutor};
use crate::engine::output::CubicSmoothingSpline;
use crate::engine::prepare::{restore_shape, PreparedData};
use crate::engine::validator::Validator;
use crate::evaluation::ppoly::PiecewisePolynomial;
use crate::primitives::errors::CsapsError;
use crate::primitives::input::{ArrayInput, VectorInput};

// ============================================================================
// Batch Csaps Builder
// ============================================================================

/// Builder for the batch smoothing spline processor.
#[derive(Debug, Clone)]
pub struct BatchCsapsBuilder<T: Float> {
    /// Explicit smoothing parameter, or strength when normalized.
    pub smooth: Option<T>,

    /// Sample axis of the observations.
    pub axis: isize,

    /// Range-normalized smoothing.
    pub normalized_smooth: bool,

    /// Compute the degrees of freedom at fit time.
    pub compute_dof: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchCsapsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchCsapsBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            smooth: None,
            axis: -1,
            normalized_smooth: false,
            compute_dof: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the smoothing parameter.
    pub fn smooth(mut self, smooth: T) -> Self {
        self.smooth = Some(smooth);
        self
    }

    /// Set the sample axis.
    pub fn axis(mut self, axis: isize) -> Self {
        self.axis = axis;
        self
    }

    /// Enable or disable range-normalized smoothing.
    pub fn normalized_smooth(mut self, enabled: bool) -> Self {
        self.normalized_smooth = enabled;
        self
    }

    /// Enable or disable the degrees-of-freedom computation.
    pub fn degrees_of_freedom(mut self, enabled: bool) -> Self {
        self.compute_dof = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchCsaps<T>, CsapsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate smoothing parameter
        if let Some(smooth) = self.smooth {
            Validator::validate_smooth(smooth)?;
        }

        Ok(BatchCsaps {
            config: CsapsConfig {
                smooth: self.smooth,
                axis: self.axis,
                normalized_smooth: self.normalized_smooth,
                compute_dof: self.compute_dof,
            },
        })
    }
}

// ============================================================================
// Batch Csaps Processor
// ============================================================================

/// Batch smoothing spline processor.
#[derive(Debug, Clone)]
pub struct BatchCsaps<T: Float> {
    config: CsapsConfig<T>,
}

impl<T: Float + 'static> BatchCsaps<T> {
    /// Configuration used by this processor.
    pub fn config(&self) -> &CsapsConfig<T> {
        &self.config
    }

    /// Fit a smoothing spline with unit weights.
    pub fn fit<X, Y>(&self, x: &X, y: &Y) -> Result<CubicSmoothingSpline<T>, CsapsError>
    where
        X: VectorInput<T> + ?Sized,
        Y: ArrayInput<T> + ?Sized,
    {
        let x = x.to_vector("x")?;
        let prepared = PreparedData::new(x, y.as_array_view(), None, self.config.axis)?;
        self.fit_prepared(prepared)
    }

    /// Fit a smoothing spline with per-site weights.
    pub fn fit_weighted<X, Y, W>(
        &self,
        x: &X,
        y: &Y,
        w: &W,
    ) -> Result<CubicSmoothingSpline<T>, CsapsError>
    where
        X: VectorInput<T> + ?Sized,
        Y: ArrayInput<T> + ?Sized,
        W: VectorInput<T> + ?Sized,
    {
        let x = x.to_vector("x")?;
        let w = w.to_vector("weights")?;
        let prepared = PreparedData::new(x, y.as_array_view(), Some(w), self.config.axis)?;
        self.fit_prepared(prepared)
    }

    fn fit_prepared(&self, data: PreparedData<T>) -> Result<CubicSmoothingSpline<T>, CsapsError> {
        let result = CsapsExecutor::from_config(&self.config).run(&data.x, &data.y, &data.w)?;

        let coeffs = restore_shape(&result.coeffs, &data.trailing_shape);
        let spline = PiecewisePolynomial::new(data.x, coeffs, data.axis)?;

        Ok(CubicSmoothingSpline::new(
            spline,
            result.smooth,
            result.degrees_of_freedom,
        ))
    }
}
