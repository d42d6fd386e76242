//! Error types for smoothing spline operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while preparing
//! data, building and solving the penalized system, and scoring a fitted
//! spline.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., expected vs. actual lengths).
//! * **Deferred**: Builder errors are recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Taxonomy**: Every variant maps onto one [`ErrorKind`].
//!
//! ## Key concepts
//!
//! 1. **Invalid input**: Malformed sites, observations, weights or parameters.
//! 2. **Invalid state**: An operation needs something the spline was not built with.
//! 3. **Solver failure**: The assembled system cannot be solved.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Broad classification of [`CsapsError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed inputs or configuration; never silently corrected.
    InvalidInput,

    /// The operation requires a prerequisite the object does not have.
    InvalidState,

    /// The linear system is singular or otherwise unsolvable.
    Solver,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing spline operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CsapsError {
    /// Fewer data sites than the fit requires.
    TooFewPoints {
        /// Number of sites provided.
        got: usize,
        /// Minimum required sites.
        min: usize,
    },

    /// A vector input (sites or weights) is not one-dimensional.
    InvalidDimension {
        /// Name of the offending input.
        name: &'static str,
        /// Number of dimensions it has.
        ndim: usize,
    },

    /// The sample axis is out of range for the observation array.
    InvalidAxis {
        /// Axis as supplied by the caller (may be negative).
        axis: isize,
        /// Number of dimensions of the observation array.
        ndim: usize,
    },

    /// An input does not have the length required by the data sites.
    LengthMismatch {
        /// Name of the offending input.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Length provided.
        got: usize,
    },

    /// Data sites must satisfy `x[0] < x[1] < ... < x[n-1]`.
    NotIncreasing {
        /// Index `i` of the first pair with `x[i + 1] <= x[i]`.
        index: usize,
    },

    /// Sites or weights contain NaN or infinite values.
    InvalidNumericValue(String),

    /// Smoothing parameter must be finite and within `[0, 1]`.
    InvalidSmooth(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// GCV was requested on a spline fitted without degrees of freedom.
    MissingDegreesOfFreedom,

    /// The penalized system (or the degrees-of-freedom matrix) is singular.
    SingularSystem(String),
}

impl CsapsError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDegreesOfFreedom => ErrorKind::InvalidState,
            Self::SingularSystem(_) => ErrorKind::Solver,
            _ => ErrorKind::InvalidInput,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CsapsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few data sites: got {got}, need at least {min}")
            }
            Self::InvalidDimension { name, ndim } => {
                write!(
                    f,
                    "Invalid input: '{name}' must be a one-dimensional vector (got {ndim} dimensions)"
                )
            }
            Self::InvalidAxis { axis, ndim } => {
                write!(
                    f,
                    "Invalid axis: {axis} is out of range for data with {ndim} dimensions"
                )
            }
            Self::LengthMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: '{name}' has {got} elements along the sample axis, expected {expected}"
                )
            }
            Self::NotIncreasing { index } => {
                write!(
                    f,
                    "Invalid input: sites must be strictly increasing (x[{}] <= x[{index}])",
                    index + 1
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSmooth(p) => {
                write!(f, "Invalid smoothing parameter: {p} (must be in [0, 1])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MissingDegreesOfFreedom => write!(
                f,
                "Degrees of freedom are not available: refit with degrees-of-freedom computation enabled"
            ),
            Self::SingularSystem(msg) => write!(f, "Singular system: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CsapsError {}
