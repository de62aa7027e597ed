//! Sobolev Walsh Transform
//!
//! Transforms a continuous function through its finite-difference
//! derivative and reconstructs it by integration. The forward direction
//! differences `f` into dyadic increments and fast-transforms them; the
//! inverse direction inverse-transforms the coefficients and accumulates
//! the increments back into a piecewise-linear interpolant of `f`.
//!
//! Working on the derivative exploits linearity: the transform of the
//! increments costs one function sample per grid point instead of a
//! Walsh-weighted sum per coefficient, and integrating the reconstruction
//! recovers a continuous interpolant rather than a staircase.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::sobolev::{sobolev_forward, sobolev_inverse};
//! use walsh_dsp::Ordering;
//!
//! let f = |x: f64| x * x;
//! let coeffs = sobolev_forward(f, 5, Ordering::Dyadic).unwrap();
//! let rebuilt = sobolev_inverse(&coeffs, f(0.0), Ordering::Dyadic).unwrap();
//! assert!((rebuilt.eval(0.7) - 0.49).abs() < 1e-3);
//! ```

use crate::fast::{fast_forward, fast_inverse};
use crate::types::{Ordering, WalshError, WalshResult};
use tracing::trace;

/// Tolerance for detecting that a query point sits exactly on a grid node.
pub const GRID_EPSILON: f64 = 1e-12;

/// Largest supported Sobolev depth (`2^k` increments).
const MAX_DEPTH: u32 = 30;

/// A piecewise-linear function on `[0, 1]` built from cumulative
/// increments.
///
/// Holds `n + 1` node values over `n` equal cells. Immutable once built;
/// evaluation locates the enclosing cell and interpolates linearly.
/// Queries outside `[0, 1]` clamp to the endpoint values.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    nodes: Vec<f64>,
}

impl PiecewiseLinear {
    /// Build from an anchor value `f0` and per-cell increments: node `0`
    /// is `f0`, node `i + 1` is the running sum of the first `i + 1`
    /// increments.
    pub fn from_increments(f0: f64, increments: &[f64]) -> WalshResult<Self> {
        if increments.is_empty() {
            return Err(WalshError::EmptyInput);
        }
        let mut nodes = Vec::with_capacity(increments.len() + 1);
        nodes.push(f0);
        let mut acc = f0;
        for &g in increments {
            acc += g;
            nodes.push(acc);
        }
        Ok(Self { nodes })
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The `n + 1` node values.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Evaluate at `x`.
    ///
    /// Clamps to the first node for `x ≤ 0` and the last for `x ≥ 1`.
    /// When `x · n` is within [`GRID_EPSILON`] of an integer the node
    /// value is returned directly instead of interpolating.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.cells();
        if x <= 0.0 {
            return self.nodes[0];
        }
        if x >= 1.0 {
            return self.nodes[n];
        }
        let pos = x * n as f64;
        let index = pos as usize;
        if pos - (index as f64) < GRID_EPSILON {
            return self.nodes[index];
        }
        let left = self.nodes[index];
        let right = self.nodes[index + 1];
        left + (right - left) * (pos - index as f64)
    }
}

/// Approximate the Walsh coefficients of `f` by transforming its
/// finite-difference derivative.
///
/// Builds `g[i] = f((i+1)/n) - f(i/n)` for `n = 2^depth`, then applies the
/// fast forward transform. Coefficient 0 telescopes to `f(1) - f(0)`.
pub fn sobolev_forward<F>(f: F, depth: u32, ordering: Ordering) -> WalshResult<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    if depth > MAX_DEPTH {
        return Err(WalshError::OrderTooLarge {
            order: depth,
            max: MAX_DEPTH,
        });
    }
    trace!(depth, ?ordering, "Sobolev forward transform");
    let n = 1usize << depth;
    let step = 1.0 / n as f64;
    let increments: Vec<f64> = (0..n)
        .map(|i| f((i + 1) as f64 * step) - f(i as f64 * step))
        .collect();
    fast_forward(&increments, ordering)
}

/// Reconstruct a piecewise-linear interpolant from Sobolev coefficients.
///
/// Inverse-transforms the coefficients back into increments and
/// accumulates them from the anchor value `f0 = f(0)`.
pub fn sobolev_inverse(
    coefficients: &[f64],
    f0: f64,
    ordering: Ordering,
) -> WalshResult<PiecewiseLinear> {
    let increments = fast_inverse(coefficients, ordering)?;
    PiecewiseLinear::from_increments(f0, &increments)
}
