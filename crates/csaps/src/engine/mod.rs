//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit by coordinating primitives (input traits,
//! banded storage) and algorithms (system assembly, parameter selection,
//! solve, degrees of freedom). It also validates inputs and packages the
//! result as a fitted spline.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for a single fit.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Canonical data preparation.
pub mod prepare;

/// The fitted spline type.
pub mod output;
