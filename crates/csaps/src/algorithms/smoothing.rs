//! Smoothing parameter selection.
//!
//! ## Purpose
//!
//! This module resolves the scalar smoothing parameter `p` in `[0, 1]` that
//! weighs fidelity against roughness:
//! - `p = 0`: weighted least-squares straight line.
//! - `p = 1`: natural cubic interpolating spline.
//!
//! ## Key concepts
//!
//! * **Explicit**: `p` is used as given.
//! * **Automatic**: `p = 1 / (1 + trace(R) / (6 trace(QtW)))`, which makes
//!   `p * trace(R)` equal `6 (1 - p) * trace(QtW)`.
//! * **Normalized**: A strength `s` is mapped to `p` so that the fit does not
//!   depend on the scale of the sites and is less sensitive to site clumping
//!   and to the weight distribution:
//!
//! ```text
//! span  = max(x) - min(x)
//! eff_x = 1 + span^2 / sum(dx^2)
//! eff_w = sum(w)^2 / sum(w^2)
//! k     = 80 span^3 n^-2 eff_x^-1/2 eff_w^-1/2
//! p     = s / (s + (1 - s) k)
//! ```
//!
//! ## Non-goals
//!
//! * This module does not search for a GCV-optimal parameter.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::SplineSystem;

/// Strength used by normalized smoothing when none is given.
pub const DEFAULT_NORMALIZED_STRENGTH: f64 = 0.5;

// ============================================================================
// Smoothing Mode
// ============================================================================

/// How the smoothing parameter is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingMode<T> {
    /// Use the given `p` as-is.
    Explicit(T),

    /// Balance the traces of the two system matrices.
    Automatic,

    /// Map a strength `s` to `p` through the range-normalized formula.
    Normalized(T),
}

impl<T: Float> SmoothingMode<T> {
    /// Resolve the mode from builder settings.
    pub fn from_config(smooth: Option<T>, normalized: bool) -> Self {
        match (smooth, normalized) {
            (s, true) => Self::Normalized(
                s.unwrap_or_else(|| T::from(DEFAULT_NORMALIZED_STRENGTH).unwrap()),
            ),
            (Some(p), false) => Self::Explicit(p),
            (None, false) => Self::Automatic,
        }
    }

    /// Compute `p` for a system built from sites `x` and weights `w`.
    pub fn select(&self, system: &SplineSystem<T>, x: &[T], w: &[T]) -> T {
        match *self {
            Self::Explicit(p) => p,
            Self::Automatic => automatic_smooth(system),
            Self::Normalized(s) => normalized_smooth(x, w, s),
        }
    }
}

// ============================================================================
// Selection Rules
// ============================================================================

/// Default `p` from the traces of `R` and `QtW`.
pub fn automatic_smooth<T: Float>(system: &SplineSystem<T>) -> T {
    let six = T::from(6.0).unwrap();
    T::one() / (T::one() + system.r.trace() / (six * system.qtw.trace()))
}

/// Range-normalized `p` for strength `s`.
pub fn normalized_smooth<T: Float>(x: &[T], w: &[T], s: T) -> T {
    let n = x.len();
    let (lo, hi) = x
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;

    let sum_dx_sq = x
        .windows(2)
        .map(|p| p[1] - p[0])
        .fold(T::zero(), |acc, h| acc + h * h);
    let sum_w = w.iter().fold(T::zero(), |acc, &v| acc + v);
    let sum_w_sq = w.iter().fold(T::zero(), |acc, &v| acc + v * v);

    let eff_x = T::one() + span * span / sum_dx_sq;
    let eff_w = sum_w * sum_w / sum_w_sq;
    let n_t = T::from(n).unwrap();
    let k = T::from(80.0).unwrap() * span.powi(3) / (n_t * n_t) / eff_x.sqrt() / eff_w.sqrt();

    s / (s + (T::one() - s) * k)
}
