//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing execution builders that adapt the
//! engine layer to a mode of use. Fits are single batch computations, so the
//! batch adapter is the only one:
//!
//! - **Batch**: Whole-dataset fitting in memory
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for smoothing spline fitting.
pub mod batch;
