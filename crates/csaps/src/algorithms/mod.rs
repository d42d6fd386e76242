//! Layer 3: Algorithms
//!
//! This layer implements the numerical core of the cubic smoothing spline:
//! banded system assembly, smoothing parameter selection, the penalized solve
//! with coefficient reconstruction and the effective degrees of freedom. It is
//! orchestrated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Banded matrices R, Qt and QtW built from the sites and weights.
pub mod system;

// Explicit, automatic and normalized smoothing parameter selection.
pub mod smoothing;

// Penalized solve and piecewise-cubic coefficients.
pub mod solver;

// Trace of the smoother matrix.
pub mod dof;
