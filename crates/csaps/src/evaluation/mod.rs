//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns fitting results into usable outputs:
//! - Piecewise polynomial storage and evaluation (values, derivatives, extrapolation)
//! - Generalized cross-validation scoring
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Piecewise polynomial representation and evaluation.
pub mod ppoly;

/// Generalized cross-validation score.
pub mod gcv;
