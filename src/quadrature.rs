//! Numerical Quadrature
//!
//! Definite-integral approximations over a uniform subdivision. The basis
//! module uses these for the Cauchy iterated-integral form of higher
//! Walsh antiderivatives, and the series module offers a quadrature-based
//! coefficient formula for callers that can supply a derivative.
//!
//! ## Rules
//!
//! - **Midpoint**: one function sample per subinterval, exact for linear
//!   integrands.
//! - **Trapezoid**: endpoint average per subinterval, exact for linear
//!   integrands, better behaved on piecewise-smooth ones.
//! - **Simpson**: composite Simpson rule, exact up to cubic integrands.
//!   Requires an even subinterval count; an odd `n` is rounded up.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::quadrature::{integrate, QuadratureRule};
//!
//! let area = integrate(|x| x * x * x, 0.0, 1.0, 4, QuadratureRule::Simpson);
//! assert!((area - 0.25).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Quadrature rule selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    /// Midpoint (rectangular) rule.
    Midpoint,
    /// Trapezoid rule.
    #[default]
    Trapezoid,
    /// Composite Simpson rule (even subinterval count).
    Simpson,
}

/// Approximate `∫ f` over `[from, to]` with `n` uniform subintervals.
///
/// `n = 0` is treated as a single subinterval.
pub fn integrate<F>(f: F, from: f64, to: f64, n: usize, rule: QuadratureRule) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = n.max(1);
    match rule {
        QuadratureRule::Midpoint => {
            let delta = (to - from) / n as f64;
            (0..n)
                .map(|i| delta * f(from + (i as f64 + 0.5) * delta))
                .sum()
        }
        QuadratureRule::Trapezoid => {
            let delta = (to - from) / n as f64;
            (0..n)
                .map(|i| {
                    let a = from + i as f64 * delta;
                    let b = from + (i + 1) as f64 * delta;
                    (b - a) * (f(a) + f(b)) / 2.0
                })
                .sum()
        }
        QuadratureRule::Simpson => {
            let n = if n % 2 == 0 { n } else { n + 1 };
            let delta = (to - from) / n as f64;
            let mut sum = f(from) + f(to);
            for i in 1..n {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                sum += weight * f(from + i as f64 * delta);
            }
            sum * delta / 3.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_exact_for_linear() {
        let area = integrate(|x| 2.0 * x + 1.0, 0.0, 1.0, 4, QuadratureRule::Midpoint);
        assert!((area - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let area = integrate(|x| 3.0 * x, 0.0, 2.0, 8, QuadratureRule::Trapezoid);
        assert!((area - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        let area = integrate(|x| x * x * x, 0.0, 1.0, 2, QuadratureRule::Simpson);
        assert!((area - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_rounds_odd_subdivision_up() {
        let odd = integrate(|x| x * x, 0.0, 1.0, 3, QuadratureRule::Simpson);
        let even = integrate(|x| x * x, 0.0, 1.0, 4, QuadratureRule::Simpson);
        assert!((odd - even).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_converges() {
        let area = integrate(|x| x * x, 0.0, 1.0, 1000, QuadratureRule::Midpoint);
        assert!((area - 1.0 / 3.0).abs() < 1e-6);
    }
}
