//! Matrix-Based Walsh Transform
//!
//! The O(n²) reference transform: multiply the sample vector by the full
//! Walsh matrix. Slower than the butterfly path in `fast` but directly
//! tied to the matrix definition, which makes it the yardstick the fast
//! path is tested against. Also hosts the continuous partial-sum
//! reconstruction.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::slow::{forward, inverse};
//! use walsh_dsp::Ordering;
//!
//! let signal = vec![1.0, 0.0, 1.0, 0.0];
//! let coeffs = forward(&signal, Ordering::Dyadic).unwrap();
//! assert_eq!(coeffs, vec![2.0, 0.0, 2.0, 0.0]);
//!
//! let restored = inverse(&coeffs, Ordering::Dyadic).unwrap();
//! assert_eq!(restored, signal);
//! ```

use crate::basis::WalshFunction;
use crate::matrix::WalshMatrix;
use crate::types::{transform_order, Ordering, WalshError, WalshResult};
use tracing::trace;

/// Forward transform: `c = W_k · y` with `k = log2(len)`.
///
/// Unnormalized; coefficient 0 equals the sum of the inputs. Fails with
/// `InvalidLength` unless the length is a power of two.
pub fn forward(y: &[f64], ordering: Ordering) -> WalshResult<Vec<f64>> {
    let order = transform_order(y.len())?;
    trace!(len = y.len(), ?ordering, "matrix transform");
    let w = WalshMatrix::generate(order, ordering)?;
    Ok((0..y.len())
        .map(|i| {
            w.row(i)
                .iter()
                .zip(y.iter())
                .map(|(&wij, &yj)| f64::from(wij) * yj)
                .sum()
        })
        .collect())
}

/// Inverse transform: `forward` scaled by `1/len`.
///
/// The Walsh matrix is self-inverse up to this scalar since
/// `W_k · W_kᵀ = 2^k · I`.
pub fn inverse(coefficients: &[f64], ordering: Ordering) -> WalshResult<Vec<f64>> {
    let mut samples = forward(coefficients, ordering)?;
    let scale = 1.0 / coefficients.len() as f64;
    for s in samples.iter_mut() {
        *s *= scale;
    }
    Ok(samples)
}

/// A finite Walsh-series approximation of a continuous function,
/// sampling `f` at `n` equally spaced points.
///
/// Evaluates `x ↦ Σ_{i=0}^{n-1} f(i/(n-1)) · w_i(min(x, 1 - 1/n))`. The
/// clamp keeps basis evaluation off the right domain boundary at `x = 1`.
#[derive(Debug, Clone)]
pub struct PartialSum {
    terms: Vec<(f64, WalshFunction)>,
    clamp: f64,
}

impl PartialSum {
    /// Build the `n`-term partial sum of `f`.
    ///
    /// Fails with `TooFewSamples` if `n < 2` (the sample grid `i/(n-1)`
    /// needs at least two points).
    pub fn new<F>(f: F, n: usize) -> WalshResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if n < 2 {
            return Err(WalshError::TooFewSamples { got: n });
        }
        let terms = (0..n)
            .map(|i| (f(i as f64 / (n - 1) as f64), WalshFunction::new(i as u32)))
            .collect();
        Ok(Self {
            terms,
            clamp: 1.0 - 1.0 / n as f64,
        })
    }

    /// Number of terms in the sum.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the sum has no terms (never the case for `new`).
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the partial sum at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let x = x.min(self.clamp);
        self.terms
            .iter()
            .map(|(c, w)| c * f64::from(w.eval(x)))
            .sum()
    }
}
