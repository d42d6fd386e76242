//! High-level API for cubic smoothing splines.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the fit and choosing an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to an adapter builder.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Smoothing modes**: Explicit `p`, automatic (no `.smooth()`), or
//!   range-normalized (`.normalized_smooth()`, where `.smooth()` sets the strength).
//! * **Degrees of freedom**: Opt-in with `.degrees_of_freedom()`; needed for GCV.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CsapsBuilder`] via `Csaps::new()`.
//! 2. Chain configuration methods (`.smooth()`, `.axis()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchCsapsBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchCsaps;
pub use crate::engine::output::CubicSmoothingSpline;
pub use crate::evaluation::ppoly::{Extrapolate, PiecewisePolynomial};
pub use crate::primitives::errors::{CsapsError, ErrorKind};
pub use crate::primitives::input::{ArrayInput, VectorInput};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Fluent builder for configuring a smoothing spline fit.
#[derive(Debug, Clone)]
pub struct CsapsBuilder<T> {
    /// Smoothing parameter in `[0, 1]` (strength when normalized).
    pub smooth: Option<T>,

    /// Sample axis of the observations (default: -1).
    pub axis: Option<isize>,

    /// Range-normalized smoothing.
    pub normalized_smooth: Option<bool>,

    /// Compute the degrees of freedom at fit time.
    pub degrees_of_freedom: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CsapsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CsapsBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: CsapsAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smooth: None,
            axis: None,
            normalized_smooth: None,
            degrees_of_freedom: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing parameter.
    ///
    /// `0` gives the weighted least-squares line, `1` the natural interpolating
    /// spline. With normalized smoothing this is the strength `s` instead.
    pub fn smooth(mut self, smooth: T) -> Self {
        if self.smooth.is_some() {
            self.duplicate_param = Some("smooth");
        }
        self.smooth = Some(smooth);
        self
    }

    /// Set the axis of the observations that runs along the sites.
    pub fn axis(mut self, axis: isize) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Use range-normalized smoothing.
    pub fn normalized_smooth(mut self) -> Self {
        if self.normalized_smooth.is_some() {
            self.duplicate_param = Some("normalized_smooth");
        }
        self.normalized_smooth = Some(true);
        self
    }

    /// Compute the effective degrees of freedom at fit time.
    ///
    /// This costs O(n^3) time and O(n^2) memory.
    pub fn degrees_of_freedom(mut self) -> Self {
        if self.degrees_of_freedom.is_some() {
            self.duplicate_param = Some("degrees_of_freedom");
        }
        self.degrees_of_freedom = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait CsapsAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`CsapsBuilder`] into a specialized execution builder.
    fn convert(builder: CsapsBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> CsapsAdapter<T> for Batch {
    type Output = BatchCsapsBuilder<T>;

    fn convert(builder: CsapsBuilder<T>) -> Self::Output {
        let mut result = BatchCsapsBuilder::default();

        if let Some(smooth) = builder.smooth {
            result = result.smooth(smooth);
        }
        if let Some(axis) = builder.axis {
            result = result.axis(axis);
        }
        if let Some(ns) = builder.normalized_smooth {
            result = result.normalized_smooth(ns);
        }
        if let Some(dof) = builder.degrees_of_freedom {
            result = result.degrees_of_freedom(dof);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
