//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! input traits used throughout the crate. It has zero internal
//! dependencies within the crate apart from the shared error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Banded sparse matrix storage.
pub mod banded;

/// Input conversion traits.
pub mod input;
