//! Walsh Basis Functions
//!
//! Pointwise evaluation of Walsh functions and their antiderivative
//! families on the unit interval. Walsh functions form a complete
//! orthogonal basis of square waves taking values in {-1, +1}; the
//! "sequency-one" triangular family consists of their first
//! antiderivatives and is what the Sobolev reconstruction pipeline sums.
//!
//! Evaluators are plain immutable structs rather than closures: each
//! carries exactly the data its evaluation rule needs.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::basis::{WalshFunction, OneKFunction};
//!
//! // w_0 is the constant +1 function
//! let w0 = WalshFunction::new(0);
//! assert_eq!(w0.eval(0.3), 1);
//!
//! // w_1 flips sign at the midpoint
//! let w1 = WalshFunction::new(1);
//! assert_eq!(w1.eval(0.2), 1);
//! assert_eq!(w1.eval(0.7), -1);
//!
//! // The k = 2 triangular function peaks at the midpoint
//! let tri = OneKFunction::new(2);
//! assert_eq!(tri.eval(0.5), 0.5);
//! assert_eq!(tri.eval(0.25), 0.25);
//! ```

use crate::binary::{to_binary_fraction, to_binary_le};
use crate::quadrature::{integrate, QuadratureRule};

/// Subintervals used for the Cauchy iterated-integral evaluation.
const CAUCHY_SUBINTERVALS: usize = 64;

/// A single Walsh function `w_n` on the unit interval.
///
/// `w_n(x) = (-1)^p` where `p` is the bitwise dot product of the binary
/// digits of `n` (least-significant first) with the binary fraction digits
/// of `x` (most-significant first), taken modulo 2.
///
/// Evaluation uses only the fractional part of `x`, so the function is
/// 1-periodic; arguments outside `[0, 1)` are not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalshFunction {
    index: u32,
    bits: Vec<u8>,
}

impl WalshFunction {
    /// Create the Walsh function with the given index.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            bits: to_binary_le(index),
        }
    }

    /// The Walsh index this function was built from.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Evaluate at `x`, returning -1 or +1.
    ///
    /// `w_0` (empty digit vector) is +1 everywhere.
    pub fn eval(&self, x: f64) -> i8 {
        let x_bits = to_binary_fraction(x, self.bits.len());
        let parity: u32 = self
            .bits
            .iter()
            .zip(x_bits.iter())
            .map(|(&nb, &xb)| (nb & xb) as u32)
            .sum();
        if parity % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

/// Unit triangular wave: `frac(u)` rising to 0.5, then falling back to 0.
fn triangle(u: f64) -> f64 {
    let t = u - u.trunc();
    if t < 0.5 {
        t
    } else {
        1.0 - t
    }
}

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// A member of the "sequency-one" family: the first antiderivatives of the
/// Walsh functions (a Schauder-like triangular system).
///
/// - `k = 0`: constant 1
/// - `k = 1`: identity
/// - `k ≥ 2`: with `k - 1 = 2^t + i`, the scaled triangular wave
///   `w_i(x) · 2^{-t} · tri(2^t · x)`
#[derive(Debug, Clone)]
pub enum OneKFunction {
    /// The constant 1 function (`k = 0`).
    Constant,
    /// The identity function (`k = 1`).
    Identity,
    /// A Walsh-modulated triangular wave (`k ≥ 2`).
    Triangular {
        /// Sign modulation `w_i`.
        walsh: WalshFunction,
        /// Dyadic scale `2^t`.
        scale: f64,
    },
}

impl OneKFunction {
    /// Create the `k`-th member of the family.
    pub fn new(k: u32) -> Self {
        match k {
            0 => OneKFunction::Constant,
            1 => OneKFunction::Identity,
            _ => {
                let k = k - 1;
                let t = 31 - k.leading_zeros();
                let i = k - (1 << t);
                OneKFunction::Triangular {
                    walsh: WalshFunction::new(i),
                    scale: (1u32 << t) as f64,
                }
            }
        }
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            OneKFunction::Constant => 1.0,
            OneKFunction::Identity => x,
            OneKFunction::Triangular { walsh, scale } => {
                f64::from(walsh.eval(x)) / scale * triangle(scale * x)
            }
        }
    }
}

/// The `r`-th antiderivative of Walsh function `k - r`.
///
/// Three evaluation branches:
///
/// - `k < r`: the polynomial `x^k / k!`
/// - `r = 1`: the exact triangular [`OneKFunction`]
/// - otherwise: the Cauchy iterated-integral formula
///   `1/(r-1)! · ∫₀ˣ (x-t)^{r-1} · w_{k-r}(t) dt`, evaluated numerically
///   with the trapezoid rule over 64 subintervals — an approximation, not
///   an exact value.
#[derive(Debug, Clone)]
pub enum Antiderivative {
    /// Polynomial branch `x^k / k!` for `k < r`.
    Polynomial { degree: u32 },
    /// Exact first antiderivative.
    OneK(OneKFunction),
    /// Numerically integrated higher antiderivative.
    Cauchy { order: u32, walsh: WalshFunction },
}

impl Antiderivative {
    /// Create the `r`-th antiderivative evaluator for index `k`.
    pub fn new(r: u32, k: u32) -> Self {
        if k < r {
            Antiderivative::Polynomial { degree: k }
        } else if r == 1 {
            Antiderivative::OneK(OneKFunction::new(k))
        } else {
            Antiderivative::Cauchy {
                order: r,
                walsh: WalshFunction::new(k - r),
            }
        }
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Antiderivative::Polynomial { degree } => {
                x.powi(*degree as i32) / factorial(*degree)
            }
            Antiderivative::OneK(f) => f.eval(x),
            Antiderivative::Cauchy { order, walsh } => {
                let r = *order;
                integrate(
                    |t| (x - t).powi((r - 1) as i32) * f64::from(walsh.eval(t)),
                    0.0,
                    x,
                    CAUCHY_SUBINTERVALS,
                    QuadratureRule::Trapezoid,
                ) / factorial(r - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_points() -> Vec<f64> {
        (0..100).map(|i| i as f64 / 99.0).collect()
    }

    #[test]
    fn test_walsh_zero_is_constant_one() {
        let w0 = WalshFunction::new(0);
        for x in probe_points() {
            assert_eq!(w0.eval(x), 1);
        }
    }

    #[test]
    fn test_walsh_one_flips_at_midpoint() {
        let w1 = WalshFunction::new(1);
        for i in 0..100 {
            let x = i as f64 / 100.0;
            if x < 0.5 {
                assert_eq!(w1.eval(x), 1, "x = {}", x);
            } else if x > 0.5 {
                assert_eq!(w1.eval(x), -1, "x = {}", x);
            }
        }
    }

    #[test]
    fn test_walsh_is_one_periodic() {
        let w1 = WalshFunction::new(1);
        let w3 = WalshFunction::new(3);
        for x in [0.1, 0.3, 0.7, 0.9] {
            assert_eq!(w1.eval(x - 1.0), w1.eval(x), "x = {}", x);
            assert_eq!(w3.eval(x - 2.0), w3.eval(x), "x = {}", x);
            assert_eq!(w3.eval(x + 1.0), w3.eval(x), "x = {}", x);
        }
    }

    #[test]
    fn test_walsh_three_quarter_pattern() {
        let w3 = WalshFunction::new(3);
        for i in 0..100 {
            let x = i as f64 / 100.0;
            let expected = if x < 0.25 || x > 0.75 { 1 } else { -1 };
            if (x - 0.25).abs() > 1e-9 && (x - 0.75).abs() > 1e-9 {
                assert_eq!(w3.eval(x), expected, "x = {}", x);
            }
        }
    }

    #[test]
    fn test_one_k_two_triangle() {
        let f = OneKFunction::new(2);
        for (x, expected) in [(0.0, 0.0), (0.25, 0.25), (0.5, 0.5), (0.75, 0.25), (1.0, 0.0)] {
            assert_eq!(f.eval(x), expected, "x = {}", x);
        }
    }

    #[test]
    fn test_one_k_three_half_scale_triangle() {
        let f = OneKFunction::new(3);
        for (x, expected) in [
            (0.0, 0.0),
            (0.125, 0.125),
            (0.25, 0.25),
            (0.375, 0.125),
            (0.5, 0.0),
            (0.625, 0.125),
            (0.75, 0.25),
            (0.875, 0.125),
            (1.0, 0.0),
        ] {
            assert_eq!(f.eval(x), expected, "x = {}", x);
        }
    }

    #[test]
    fn test_one_k_four_sign_modulated() {
        let f = OneKFunction::new(4);
        for (x, expected) in [
            (0.0, 0.0),
            (0.125, 0.125),
            (0.25, 0.25),
            (0.375, 0.125),
            (0.5, 0.0),
            (0.625, -0.125),
            (0.75, -0.25),
            (0.875, -0.125),
            (1.0, 0.0),
        ] {
            assert_eq!(f.eval(x), expected, "x = {}", x);
        }
    }

    #[test]
    fn test_antiderivative_polynomial_branch() {
        // k < r: x^0 / 0! = 1
        let f = Antiderivative::new(1, 0);
        for x in probe_points() {
            assert!((f.eval(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_antiderivative_first_order_is_identity() {
        let f = Antiderivative::new(1, 1);
        for x in probe_points() {
            assert!((f.eval(x) - x).abs() < 1e-10);
        }
    }

    #[test]
    fn test_antiderivative_second_order_of_constant() {
        // ∫₀ˣ (x - t) · w_0(t) dt = x² / 2, exact under the trapezoid rule
        // since the integrand is linear in t.
        let f = Antiderivative::new(2, 2);
        for x in [0.0, 0.25, 0.5, 1.0] {
            assert!((f.eval(x) - x * x / 2.0).abs() < 1e-10, "x = {}", x);
        }
    }
}
