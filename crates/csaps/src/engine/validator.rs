//! Input validation for smoothing spline configuration and data.
//!
//! ## Purpose
//!
//! This module checks configuration parameters and input data before any
//! system is assembled: site count and finiteness, weight length and
//! finiteness, the smoothing parameter range and duplicate builder settings.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: The smoothing parameter lies in `[0, 1]`.
//! * **Finite Checks**: Sites and weights must be finite. Observations are not
//!   checked; non-finite values propagate into the fit.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not check monotonicity of sites; the system builder
//!   reports the first non-increasing spacing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "std")]
use std::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CsapsError;

/// Minimum number of data sites for a fit.
pub const MIN_SITES: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing spline configuration and input data.
///
/// Provides static methods that return `Result<(), CsapsError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the data sites.
    pub fn validate_sites<T: Float>(x: &[T]) -> Result<(), CsapsError> {
        if x.len() < MIN_SITES {
            return Err(CsapsError::TooFewPoints {
                got: x.len(),
                min: MIN_SITES,
            });
        }
        for (i, &v) in x.iter().enumerate() {
            if !v.is_finite() {
                return Err(CsapsError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate user-supplied weights against the number of sites.
    pub fn validate_weights<T: Float>(w: &[T], n: usize) -> Result<(), CsapsError> {
        if w.len() != n {
            return Err(CsapsError::LengthMismatch {
                name: "weights",
                expected: n,
                got: w.len(),
            });
        }
        for (i, &v) in w.iter().enumerate() {
            if !v.is_finite() {
                return Err(CsapsError::InvalidNumericValue(format!(
                    "w[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing parameter (or normalized strength).
    pub fn validate_smooth<T: Float>(smooth: T) -> Result<(), CsapsError> {
        if !smooth.is_finite() || smooth < T::zero() || smooth > T::one() {
            return Err(CsapsError::InvalidSmooth(
                smooth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CsapsError> {
        if let Some(param) = duplicate_param {
            return Err(CsapsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
