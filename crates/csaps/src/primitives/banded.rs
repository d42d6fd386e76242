//! Banded sparse matrix storage.
//!
//! ## Purpose
//!
//! This module provides [`BandedMatrix`], a matrix whose nonzero entries are
//! confined to a small set of diagonals ("bands"). Every matrix in the
//! smoothing spline system is banded, so storing only the bands keeps
//! construction, products and solves linear in the number of sites.
//!
//! ## Design notes
//!
//! * **Row-indexed bands**: `bands[k][i]` holds entry `(i, i + offsets[k])`.
//! * **Rectangular**: Rows and columns are independent (e.g. the `(n-2) x n` operator).
//! * **Closed under products**: Products and sums of banded matrices stay banded,
//!   with offsets combined accordingly.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Offsets are sorted ascending and unique.
//! * Every band has exactly `rows` slots; slots whose column falls outside
//!   `0..cols` are always zero.
//!
//! ## Non-goals
//!
//! * This module does not solve linear systems (see `math::linalg`).
//! * This module does not support general sparsity patterns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// ============================================================================
// Banded Matrix
// ============================================================================

/// Sparse matrix stored as a set of diagonals.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix<T> {
    rows: usize,
    cols: usize,
    offsets: Vec<isize>,
    bands: Vec<Vec<T>>,
}

impl<T: Float> BandedMatrix<T> {
    /// Create an all-zero banded matrix with the given diagonal offsets.
    pub fn zeros(rows: usize, cols: usize, offsets: &[isize]) -> Self {
        let mut offsets = offsets.to_vec();
        offsets.sort_unstable();
        offsets.dedup();
        let bands = vec![vec![T::zero(); rows]; offsets.len()];

        Self {
            rows,
            cols,
            offsets,
            bands,
        }
    }

    // ========================================================================
    // Shape and Access
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of nonzero diagonals strictly below the main diagonal.
    pub fn lower_bandwidth(&self) -> usize {
        self.offsets.first().map_or(0, |&o| (-o).max(0) as usize)
    }

    /// Number of nonzero diagonals strictly above the main diagonal.
    pub fn upper_bandwidth(&self) -> usize {
        self.offsets.last().map_or(0, |&o| o.max(0) as usize)
    }

    #[inline]
    fn band_index(&self, offset: isize) -> Option<usize> {
        self.offsets.binary_search(&offset).ok()
    }

    /// Column index of slot `i` in the band with the given offset, if in range.
    #[inline]
    fn column(&self, row: usize, offset: isize) -> Option<usize> {
        let j = row as isize + offset;
        if j >= 0 && (j as usize) < self.cols {
            Some(j as usize)
        } else {
            None
        }
    }

    /// Set entry `(i, j)`, which must lie on a stored band.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i < self.rows && j < self.cols, "index out of bounds");
        let k = self.band_index(j as isize - i as isize);
        debug_assert!(k.is_some(), "entry ({i}, {j}) is not on a stored band");
        if let Some(k) = k {
            self.bands[k][i] = value;
        }
    }

    /// Iterate the stored entries of row `i` as `(column, value)` pairs.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.offsets
            .iter()
            .zip(self.bands.iter())
            .filter_map(move |(&o, band)| self.column(i, o).map(|j| (j, band[i])))
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Main diagonal (length `min(rows, cols)`).
    pub fn diagonal(&self) -> Vec<T> {
        let len = self.rows.min(self.cols);
        match self.band_index(0) {
            Some(k) => self.bands[k][..len].to_vec(),
            None => vec![T::zero(); len],
        }
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> T {
        self.diagonal()
            .into_iter()
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Largest absolute entry.
    pub fn max_abs(&self) -> T {
        self.bands
            .iter()
            .flat_map(|b| b.iter())
            .fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }

    /// Whether every stored entry is finite.
    pub fn is_finite(&self) -> bool {
        self.bands.iter().flatten().all(|v| v.is_finite())
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let neg: Vec<isize> = self.offsets.iter().map(|&o| -o).collect();
        let mut out = Self::zeros(self.cols, self.rows, &neg);
        for i in 0..self.rows {
            for (j, v) in self.row(i) {
                out.set(j, i, v);
            }
        }
        out
    }

    /// Right-multiply by a diagonal matrix: `A * diag(d)`.
    pub fn scale_columns(&self, d: &[T]) -> Self {
        debug_assert_eq!(d.len(), self.cols);
        let mut out = self.clone();
        for (k, &o) in self.offsets.iter().enumerate() {
            for i in 0..self.rows {
                if let Some(j) = self.column(i, o) {
                    out.bands[k][i] = out.bands[k][i] * d[j];
                }
            }
        }
        out
    }

    /// Banded product `A * B`.
    pub fn matmul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.cols, other.rows);
        let mut offsets = Vec::with_capacity(self.offsets.len() * other.offsets.len());
        for &a in &self.offsets {
            for &b in &other.offsets {
                offsets.push(a + b);
            }
        }
        let mut out = Self::zeros(self.rows, other.cols, &offsets);

        for i in 0..self.rows {
            for (j, a) in self.row(i) {
                for (l, b) in other.row(j) {
                    if let Some(k) = out.band_index(l as isize - i as isize) {
                        out.bands[k][i] = out.bands[k][i] + a * b;
                    }
                }
            }
        }
        out
    }

    /// Linear combination `alpha * A + beta * B` of equally shaped matrices.
    pub fn linear_combination(alpha: T, a: &Self, beta: T, b: &Self) -> Self {
        debug_assert_eq!((a.rows, a.cols), (b.rows, b.cols));
        let mut offsets = a.offsets.clone();
        offsets.extend_from_slice(&b.offsets);
        let mut out = Self::zeros(a.rows, a.cols, &offsets);

        for (src, coef) in [(a, alpha), (b, beta)] {
            for (k, &o) in src.offsets.iter().enumerate() {
                if let Some(idx) = out.band_index(o) {
                    for i in 0..src.rows {
                        out.bands[idx][i] = out.bands[idx][i] + coef * src.bands[k][i];
                    }
                }
            }
        }
        out
    }

    /// Product with a dense matrix: `A * X`.
    pub fn mul_dense(&self, x: &Array2<T>) -> Array2<T> {
        debug_assert_eq!(self.cols, x.nrows());
        let ncols = x.ncols();
        let mut out = Array2::zeros((self.rows, ncols));
        for i in 0..self.rows {
            for (j, a) in self.row(i) {
                for c in 0..ncols {
                    out[[i, c]] = out[[i, c]] + a * x[[j, c]];
                }
            }
        }
        out
    }

    /// Expand to a dense matrix.
    pub fn to_dense(&self) -> Array2<T> {
        let mut out = Array2::zeros((self.rows, self.cols));
        for i in 0..self.rows {
            for (j, v) in self.row(i) {
                out[[i, j]] = v;
            }
        }
        out
    }
}
