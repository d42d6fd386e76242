//! Execution engine for smoothing spline fits.
//!
//! ## Purpose
//!
//! This module orchestrates one fit: it builds the banded system, selects
//! the smoothing parameter, solves for the coefficients and, on request,
//! computes the effective degrees of freedom.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Two sites bypass the system entirely and yield the linear interpolant
//!   with `p = 1`.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input sites are validated and observations are in canonical `d x n` form
//!   (see `engine::prepare`).
//! * A run either returns a complete output or an error; nothing is partially
//!   filled.
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (handled by `validator`).
//! * This module does not reshape coefficients to the data shape.

// External dependencies
use log::{debug, trace};
use ndarray::{Array2, Array3};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::dof::{degrees_of_freedom, LINEAR_DOF};
use crate::algorithms::smoothing::SmoothingMode;
use crate::algorithms::solver::{linear_coefficients, solve_cubic};
use crate::algorithms::system::{spacings, SplineSystem};
use crate::primitives::errors::CsapsError;

// ============================================================================
// Output
// ============================================================================

/// Output from a single fit.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Coefficient tensor, `(order, n - 1, d)`.
    pub coeffs: Array3<T>,

    /// Smoothing parameter actually used.
    pub smooth: T,

    /// Effective degrees of freedom, if requested.
    pub degrees_of_freedom: Option<T>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a smoothing spline fit.
#[derive(Debug, Clone, PartialEq)]
pub struct CsapsConfig<T> {
    /// Explicit smoothing parameter, or the strength for normalized smoothing.
    pub smooth: Option<T>,

    /// Sample axis of the observations (negative counts from the end).
    pub axis: isize,

    /// Whether to use range-normalized smoothing.
    pub normalized_smooth: bool,

    /// Whether to compute the degrees of freedom (O(n^3)).
    pub compute_dof: bool,
}

impl<T: Float> Default for CsapsConfig<T> {
    fn default() -> Self {
        Self {
            smooth: None,
            axis: -1,
            normalized_smooth: false,
            compute_dof: false,
        }
    }
}

/// Executor for cubic smoothing spline fits.
#[derive(Debug, Clone)]
pub struct CsapsExecutor<T: Float> {
    /// How the smoothing parameter is chosen.
    pub mode: SmoothingMode<T>,

    /// Whether to compute the degrees of freedom.
    pub compute_dof: bool,
}

impl<T: Float + 'static> Default for CsapsExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + 'static> CsapsExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with automatic smoothing and no degrees of freedom.
    pub fn new() -> Self {
        Self {
            mode: SmoothingMode::Automatic,
            compute_dof: false,
        }
    }

    /// Create a new executor from a `CsapsConfig`.
    pub fn from_config(config: &CsapsConfig<T>) -> Self {
        Self::new()
            .mode(SmoothingMode::from_config(
                config.smooth,
                config.normalized_smooth,
            ))
            .compute_dof(config.compute_dof)
    }

    /// Set the smoothing mode.
    pub fn mode(mut self, mode: SmoothingMode<T>) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable the degrees-of-freedom computation.
    pub fn compute_dof(mut self, enabled: bool) -> Self {
        self.compute_dof = enabled;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Run a fit on canonical inputs (`y` is `d x n`).
    pub fn run(&self, x: &[T], y: &Array2<T>, w: &[T]) -> Result<ExecutorOutput<T>, CsapsError> {
        if x.len() == 2 {
            return self.run_linear(x, y);
        }

        let system = SplineSystem::build(x, w)?;
        let p = self.mode.select(&system, x, w);
        debug!(
            "csaps: n={} channels={} mode={} p={}",
            x.len(),
            y.nrows(),
            self.mode_name(),
            p.to_f64().unwrap_or(f64::NAN)
        );

        let coeffs = solve_cubic(&system, y, w, p)?;

        let dof = if self.compute_dof {
            let dof = degrees_of_freedom(&system, w, p)?;
            trace!(
                "csaps: degrees of freedom = {}",
                dof.to_f64().unwrap_or(f64::NAN)
            );
            Some(dof)
        } else {
            None
        };

        Ok(ExecutorOutput {
            coeffs,
            smooth: p,
            degrees_of_freedom: dof,
        })
    }

    /// Fit through exactly two sites.
    fn run_linear(&self, x: &[T], y: &Array2<T>) -> Result<ExecutorOutput<T>, CsapsError> {
        spacings(x)?;
        debug!(
            "csaps: n=2 channels={} linear interpolant, p=1",
            y.nrows()
        );
        Ok(ExecutorOutput {
            coeffs: linear_coefficients(x, y),
            smooth: T::one(),
            degrees_of_freedom: self
                .compute_dof
                .then(|| T::from(LINEAR_DOF).unwrap()),
        })
    }

    fn mode_name(&self) -> &'static str {
        match self.mode {
            SmoothingMode::Explicit(_) => "explicit",
            SmoothingMode::Automatic => "automatic",
            SmoothingMode::Normalized(_) => "normalized",
        }
    }
}
