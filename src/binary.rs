//! Binary Digit Expansion
//!
//! Converts integers and fractional reals to their binary digit sequences.
//! These expansions drive Walsh basis evaluation: bit `i` of the function
//! index toggles the sign contribution of the `i`-th dyadic subdivision of
//! the unit interval.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::binary::{to_binary_le, to_binary_fraction};
//!
//! // 4 = 0b100, least-significant bit first
//! assert_eq!(to_binary_le(4), vec![0, 0, 1]);
//!
//! // 0.625 = 0.101 in binary, most-significant digit first
//! assert_eq!(to_binary_fraction(0.625, 3), vec![1, 0, 1]);
//! ```

/// Little-endian binary digits of `n` (least-significant bit first).
///
/// The result has `ceil(log2(n + 1))` digits; `n = 0` yields an empty
/// vector.
pub fn to_binary_le(n: u32) -> Vec<u8> {
    let mut bits = Vec::with_capacity((32 - n.leading_zeros()) as usize);
    let mut n = n;
    while n > 0 {
        bits.push((n & 1) as u8);
        n >>= 1;
    }
    bits
}

/// First `digits` binary digits of the fractional part of `x`,
/// most-significant digit first.
///
/// Computed by repeated doubling and truncation, so there is no rounding
/// correction: when `x` is exactly representable in fewer digits the
/// trailing digits are 0. The expansion uses `x` modulo 1, so any integer
/// part is discarded and negative arguments wrap into `[0, 1)`.
pub fn to_binary_fraction(x: f64, digits: usize) -> Vec<u8> {
    let mut bits = vec![0u8; digits];
    let mut x = x.rem_euclid(1.0);
    // rounding can push the remainder of a tiny negative up to exactly 1.0
    if x >= 1.0 {
        x = 0.0;
    }
    for bit in bits.iter_mut() {
        x *= 2.0;
        *bit = x as u8;
        x -= x.trunc();
    }
    bits
}
