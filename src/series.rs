//! Walsh Series Coefficients
//!
//! Computes individual Walsh-series coefficients for arbitrary indices and
//! evaluates truncated series over the triangular "sequency-one" family.
//! Unlike the transforms, the coefficient index here is not restricted to
//! a power of two: each coefficient projects the finite-difference vector
//! of `f` onto one matrix row at the smallest resolution that contains it.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::series::{coefficient_one_k, WalshSeries};
//!
//! let f = |x: f64| x * x;
//!
//! // The base coefficient is the total variation f(1) - f(0)
//! assert_eq!(coefficient_one_k(f, 1).unwrap(), 1.0);
//!
//! // A short series already tracks the function closely
//! let series = WalshSeries::from_function(f, 32).unwrap();
//! assert!((series.eval(0.5) - 0.25).abs() < 1e-3);
//! ```

use crate::basis::{OneKFunction, WalshFunction};
use crate::matrix::WalshMatrix;
use crate::quadrature::{integrate, QuadratureRule};
use crate::types::{Ordering, WalshError, WalshResult};

/// Compute the `k`-th Walsh-series coefficient of `f` in Dyadic ordering.
///
/// See [`coefficient_one_k_with`] for the ordering-explicit form.
pub fn coefficient_one_k<F>(f: F, k: u32) -> WalshResult<f64>
where
    F: Fn(f64) -> f64,
{
    coefficient_one_k_with(f, k, Ordering::Dyadic)
}

/// Compute the `k`-th Walsh-series coefficient of `f` against the given
/// matrix ordering.
///
/// For `k ≤ 1` the coefficient is the total variation `f(1) - f(0)` (the
/// degree-0 and degree-1 indices share the base coefficient by
/// convention). For larger `k`, with `k' = k - 1` and
/// `n = floor(log2(k')) + 1`, the finite-difference vector of `f` sampled
/// at `2^n` points is projected onto row `k'` of the order-`n` matrix.
///
/// Dyadic ordering is the one whose rows nest across resolutions, which
/// makes these coefficients agree with `sobolev_forward` entry for entry;
/// Natural ordering projects onto a Hadamard row instead and does not
/// have that consistency.
pub fn coefficient_one_k_with<F>(f: F, k: u32, ordering: Ordering) -> WalshResult<f64>
where
    F: Fn(f64) -> f64,
{
    if k <= 1 {
        return Ok(f(1.0) - f(0.0));
    }
    let k = k - 1;
    let order = 32 - k.leading_zeros();
    let w = WalshMatrix::generate(order, ordering)?;
    let size = w.size() as f64;
    Ok(w.row(k as usize)
        .iter()
        .enumerate()
        .map(|(i, &wki)| f64::from(wki) * (f((i + 1) as f64 / size) - f(i as f64 / size)))
        .sum())
}

/// Compute the `k`-th coefficient from the derivative of `f` by
/// quadrature: `∫₀¹ f'(t) · w_{k-1}(t) dt` with the midpoint rule over
/// `n` subintervals.
///
/// An approximation; [`coefficient_one_k`] is exact for the same
/// definition whenever `f` is available directly. Fails with
/// `InvalidIndex` if `k = 0` (there is no Walsh index -1 to project
/// onto).
pub fn coefficient_one_k_quadrature<F>(f_prime: F, k: u32, n: usize) -> WalshResult<f64>
where
    F: Fn(f64) -> f64,
{
    if k == 0 {
        return Err(WalshError::InvalidIndex { index: k });
    }
    let w = WalshFunction::new(k - 1);
    Ok(integrate(
        |t| f_prime(t) * f64::from(w.eval(t)),
        0.0,
        1.0,
        n,
        QuadratureRule::Midpoint,
    ))
}

/// A truncated Walsh series over the triangular family:
/// `f(0) + Σ_{k=1}^{n} c_k · oneK_k(x)`.
#[derive(Debug, Clone)]
pub struct WalshSeries {
    f0: f64,
    terms: Vec<(f64, OneKFunction)>,
}

impl WalshSeries {
    /// Build an `n`-term series for `f`, computing each coefficient with
    /// [`coefficient_one_k`].
    pub fn from_function<F>(f: F, n: usize) -> WalshResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let f0 = f(0.0);
        let terms = (1..=n as u32)
            .map(|k| Ok((coefficient_one_k(&f, k)?, OneKFunction::new(k))))
            .collect::<WalshResult<Vec<_>>>()?;
        Ok(Self { f0, terms })
    }

    /// Build a series from precomputed coefficients; `coefficients[i]`
    /// weights `oneK_{i+1}`.
    pub fn from_coefficients(f0: f64, coefficients: &[f64]) -> Self {
        let terms = coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, OneKFunction::new(i as u32 + 1)))
            .collect();
        Self { f0, terms }
    }

    /// Number of series terms (excluding the anchor value).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the series has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the series at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.f0 + self.terms.iter().map(|(c, w)| c * w.eval(x)).sum::<f64>()
    }
}
