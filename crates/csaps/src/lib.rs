//! # csaps — Cubic Smoothing Splines for Rust
//!
//! Univariate and multivariate cubic smoothing splines: fit a piecewise cubic
//! curve to noisy samples, trading fidelity to the data against roughness
//! with a single parameter `p` in `[0, 1]`, then evaluate the curve and its
//! derivatives anywhere in or beyond the sampled domain.
//!
//! ## What is a smoothing spline?
//!
//! For sites `x[0] < ... < x[n-1]`, observations `y` and weights `w`, the
//! smoothing spline `f` minimizes
//!
//! ```text
//! p * sum_i w[i] (y[i] - f(x[i]))^2 + (1 - p) * integral f''(t)^2 dt
//! ```
//!
//! `p = 0` gives the weighted least-squares straight line and `p = 1` the
//! natural cubic interpolating spline. The solution is found by a banded
//! solve that is linear in the number of sites.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use csaps::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! // Build the model
//! let model = Csaps::new()
//!     .smooth(0.85)       // Smoothing parameter
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the data
//! let spline = model.fit(&x, &y)?;
//!
//! // Evaluate on a finer grid
//! let yi = spline.evaluate(&[1.0, 1.5, 2.0, 2.5])?;
//! assert_eq!(yi.shape(), &[4]);
//!
//! println!("{}", spline);
//! # Result::<(), CsapsError>::Ok(())
//! ```
//!
//! ### Automatic and Normalized Smoothing
//!
//! Leaving out `.smooth()` chooses `p` from the site spacings. With
//! `.normalized_smooth()` the value passed to `.smooth()` is a strength that
//! behaves the same whatever the scale of the sites:
//!
//! ```rust
//! use csaps::prelude::*;
//!
//! let x: Vec<f64> = (0..20).map(|i| i as f64 * 1000.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v / 3000.0).sin()).collect();
//!
//! let spline = Csaps::new()
//!     .normalized_smooth()
//!     .smooth(0.5)
//!     .adapter(Batch)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! assert!(spline.smooth() > 0.0 && spline.smooth() < 1.0);
//! # Result::<(), CsapsError>::Ok(())
//! ```
//!
//! ### Multivariate Data and GCV
//!
//! Observations may be N-dimensional; `.axis()` names the axis that runs along
//! the sites (default: the last one). Degrees of freedom are opt-in and
//! required by the GCV score:
//!
//! ```rust
//! use csaps::prelude::*;
//! use ndarray::array;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = array![[0.0, 1.1, 1.9, 3.2, 4.0], [1.0, 0.4, 0.1, 0.3, 0.9]];
//!
//! let mut spline = Csaps::new()
//!     .smooth(0.5)
//!     .degrees_of_freedom()
//!     .adapter(Batch)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! let fitted = spline.evaluate(&x)?;
//! assert_eq!(fitted.shape(), &[2, 5]);
//!
//! let score = spline.compute_gcv(&y, &fitted)?;
//! assert!(score >= 0.0);
//! # Result::<(), CsapsError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<CubicSmoothingSpline<T>, CsapsError>`. Every error
//! maps onto an [`ErrorKind`](prelude::ErrorKind): invalid input, invalid
//! state (GCV without degrees of freedom) or a solver failure.
//!
//! ```rust
//! use csaps::prelude::*;
//!
//! let model = Csaps::<f64>::new().adapter(Batch).build()?;
//!
//! match model.fit(&[0.0, 1.0, 1.0, 2.0], &[1.0, 2.0, 3.0, 4.0]) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidInput),
//! }
//! # Result::<(), CsapsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! csaps = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The fit reports the selected smoothing parameter at `debug` level and the
//! degrees of freedom and GCV score at `trace` level through the `log` facade.
//!
//! ## References
//!
//! - de Boor, C. (1978). "A Practical Guide to Splines"
//! - Reinsch, C. H. (1967). "Smoothing by Spline Functions"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure numerical building blocks.
mod math;

// Layer 3: Algorithms - system assembly, parameter selection and solve.
mod algorithms;

// Layer 4: Evaluation - piecewise polynomial evaluation and scoring.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for smoothing splines.
mod api;

// Standard csaps prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch, ArrayInput, BatchCsaps, CsapsBuilder as Csaps, CsapsError,
        CubicSmoothingSpline, ErrorKind, Extrapolate, PiecewisePolynomial, VectorInput,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
