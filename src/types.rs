//! Core types for Walsh transform processing
//!
//! This module defines the fundamental types shared by every transform path:
//! the sample aliases, the matrix/sequence ordering selector, and the crate
//! error type.
//!
//! ## Orderings
//!
//! The same set of Walsh functions can be enumerated two ways, and the
//! choice changes which row of the transform a given coefficient lands in:
//!
//! - **Dyadic**: rows nest recursively — row `2i` and row `2i+1` of the
//!   doubled matrix both derive from row `i` of the previous size. A fast
//!   transform in this ordering needs a bit-reversal pass before the
//!   butterfly network.
//! - **Natural**: the Hadamard (bit-XOR) ordering produced by the classic
//!   recursive block construction `[[H, H], [H, -H]]`. The butterfly
//!   network produces this ordering directly.
//!
//! The two are related by a fixed bit-reversal permutation at each
//! power-of-two size.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A floating point sample (for real-valued signals)
pub type Sample = f64;

/// Result type for Walsh transform operations
pub type WalshResult<T> = Result<T, WalshError>;

/// Errors that can occur during Walsh transform operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalshError {
    #[error("invalid vector length {len}: must be a power of two")]
    InvalidLength { len: usize },

    #[error("input must contain at least one sample")]
    EmptyInput,

    #[error("matrix order {order} too large: maximum supported is {max}")]
    OrderTooLarge { order: u32, max: u32 },

    #[error("partial sum needs at least two sample points, got {got}")]
    TooFewSamples { got: usize },

    #[error("coefficient index {index} invalid: must be at least 1")]
    InvalidIndex { index: u32 },
}

/// Enumeration order of Walsh functions for matrices and transforms.
///
/// Selects how matrix rows (and therefore transform coefficients) map to
/// Walsh indices. Every transform API threads this through with `Dyadic`
/// as the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Dyadic ordering: rows nest recursively under doubling.
    #[default]
    Dyadic,
    /// Natural (Hadamard) ordering: bit-XOR structure, no reordering pass.
    Natural,
}

/// Validate a transform length and return its order `k = log2(len)`.
///
/// Every matrix and fast-path operation requires a power-of-two length;
/// this is checked before any computation proceeds.
pub fn transform_order(len: usize) -> WalshResult<u32> {
    if len == 0 {
        return Err(WalshError::EmptyInput);
    }
    if !len.is_power_of_two() {
        return Err(WalshError::InvalidLength { len });
    }
    Ok(len.trailing_zeros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_order_powers_of_two() {
        assert_eq!(transform_order(1).unwrap(), 0);
        assert_eq!(transform_order(2).unwrap(), 1);
        assert_eq!(transform_order(1024).unwrap(), 10);
    }

    #[test]
    fn test_transform_order_rejects_non_power() {
        assert!(matches!(
            transform_order(12),
            Err(WalshError::InvalidLength { len: 12 })
        ));
    }

    #[test]
    fn test_transform_order_rejects_empty() {
        assert!(matches!(transform_order(0), Err(WalshError::EmptyInput)));
    }

    #[test]
    fn test_default_ordering_is_dyadic() {
        assert_eq!(Ordering::default(), Ordering::Dyadic);
    }
}
