//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks used by the spline
//! algorithms:
//! - Direct solvers (banded LU, dense inverse)
//! - Finite differences and zero padding along the site axis
//!
//! These carry no spline-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Banded and dense direct solvers.
pub mod linalg;

/// Finite differences along the site axis.
pub mod finite_diff;
