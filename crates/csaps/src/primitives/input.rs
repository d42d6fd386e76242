//! Input abstractions for smoothing spline fitting.
//!
//! ## Purpose
//!
//! This module lets `fit` and the GCV score accept several data formats
//! (slices, vectors, ndarray arrays of any dimension) through two small traits.
//!
//! ## Design notes
//!
//! * **Vector inputs**: Sites and weights are copied into an owned vector; arrays
//!   must be one-dimensional.
//! * **Array inputs**: Observations are exposed as a dynamic-dimension view
//!   without copying.
//!
//! ## Key concepts
//!
//! * **VectorInput**: One value per data site.
//! * **ArrayInput**: N-dimensional data with one axis running along the sites.
//!
//! ## Non-goals
//!
//! * This module does not check lengths against the data sites.
//! * This module does not reshape data (see `engine::prepare`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use ndarray::{ArrayBase, ArrayView1, ArrayViewD, Data, Dimension};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CsapsError;

// ============================================================================
// Vector Input
// ============================================================================

/// Types usable as a one-dimensional input (data sites, weights).
pub trait VectorInput<T: Float> {
    /// Copy the input into an owned vector.
    ///
    /// `name` identifies the input in error messages.
    fn to_vector(&self, name: &'static str) -> Result<Vec<T>, CsapsError>;
}

impl<T: Float> VectorInput<T> for [T] {
    fn to_vector(&self, _name: &'static str) -> Result<Vec<T>, CsapsError> {
        Ok(self.to_vec())
    }
}

impl<T: Float> VectorInput<T> for Vec<T> {
    fn to_vector(&self, _name: &'static str) -> Result<Vec<T>, CsapsError> {
        Ok(self.clone())
    }
}

impl<T: Float, const N: usize> VectorInput<T> for [T; N] {
    fn to_vector(&self, _name: &'static str) -> Result<Vec<T>, CsapsError> {
        Ok(self.to_vec())
    }
}

impl<T: Float, S, D> VectorInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn to_vector(&self, name: &'static str) -> Result<Vec<T>, CsapsError> {
        if self.ndim() != 1 {
            return Err(CsapsError::InvalidDimension {
                name,
                ndim: self.ndim(),
            });
        }
        Ok(self.iter().copied().collect())
    }
}

// ============================================================================
// Array Input
// ============================================================================

/// Types usable as N-dimensional observation data.
pub trait ArrayInput<T: Float> {
    /// Borrow the input as a dynamic-dimension view.
    fn as_array_view(&self) -> ArrayViewD<'_, T>;
}

impl<T: Float> ArrayInput<T> for [T] {
    fn as_array_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(self).into_dyn()
    }
}

impl<T: Float> ArrayInput<T> for Vec<T> {
    fn as_array_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(self.as_slice()).into_dyn()
    }
}

impl<T: Float, const N: usize> ArrayInput<T> for [T; N] {
    fn as_array_view(&self) -> ArrayViewD<'_, T> {
        ArrayView1::from(&self[..]).into_dyn()
    }
}

impl<T: Float, S, D> ArrayInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn as_array_view(&self) -> ArrayViewD<'_, T> {
        self.view().into_dyn()
    }
}
