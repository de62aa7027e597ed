//! Fast Walsh-Hadamard Transform
//!
//! The O(n log n) butterfly path. Each stage pairs elements `h` apart and
//! replaces them with their sum and difference — no multiplies, no twiddle
//! factors. The butterfly alone produces Natural (Hadamard) ordering;
//! Dyadic ordering adds a bit-reversal permutation before the network.
//!
//! The butterfly is self-inverse up to scale: applying it twice reproduces
//! the input multiplied by `n`, so the inverse transform is the forward
//! transform divided by `n`.
//!
//! Both real (`f64`) and complex (`Complex64`) sample paths are provided.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::fast::{fast_forward, fast_inverse};
//! use walsh_dsp::Ordering;
//!
//! let signal = vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];
//! let coeffs = fast_forward(&signal, Ordering::Natural).unwrap();
//! assert_eq!(coeffs, vec![4.0, 2.0, 0.0, -2.0, 0.0, 2.0, 0.0, 2.0]);
//!
//! let restored = fast_inverse(&coeffs, Ordering::Natural).unwrap();
//! assert_eq!(restored, signal);
//! ```

use crate::types::{transform_order, Complex, Ordering, WalshResult};
use tracing::trace;

/// Reverse the low `bits` bits of `i`.
#[inline]
fn reverse_bits(i: usize, bits: u32) -> usize {
    let mut rev = 0usize;
    let mut v = i;
    for _ in 0..bits {
        rev = (rev << 1) | (v & 1);
        v >>= 1;
    }
    rev
}

/// Reorder a vector by reversing the `k`-bit binary representation of each
/// index, `k = log2(len)`.
///
/// This converts between Dyadic order and the order the in-place butterfly
/// network expects. Fails with `InvalidLength` unless the length is a
/// power of two.
pub fn bit_reversal_permute(v: &[f64]) -> WalshResult<Vec<f64>> {
    let bits = transform_order(v.len())?;
    let mut out = vec![0.0; v.len()];
    for (i, &val) in v.iter().enumerate() {
        out[reverse_bits(i, bits)] = val;
    }
    Ok(out)
}

/// In-place FWHT butterfly network.
///
/// For `h = 1, 2, 4, … < n`, each pair `(a, b) = (v[j], v[j+h])` becomes
/// `(a + b, a - b)`. Length is assumed to be a power of two (checked by
/// the public entry points).
pub fn butterfly(data: &mut [f64]) {
    debug_assert!(data.is_empty() || data.len().is_power_of_two());
    let n = data.len();
    let mut h = 1;
    while h < n {
        let step = h * 2;
        let mut i = 0;
        while i < n {
            for j in i..i + h {
                let a = data[j];
                let b = data[j + h];
                data[j] = a + b;
                data[j + h] = a - b;
            }
            i += step;
        }
        h = step;
    }
}

/// In-place FWHT butterfly network over complex samples.
pub fn butterfly_complex(data: &mut [Complex]) {
    debug_assert!(data.is_empty() || data.len().is_power_of_two());
    let n = data.len();
    let mut h = 1;
    while h < n {
        let step = h * 2;
        let mut i = 0;
        while i < n {
            for j in i..i + h {
                let a = data[j];
                let b = data[j + h];
                data[j] = a + b;
                data[j + h] = a - b;
            }
            i += step;
        }
        h = step;
    }
}

/// Fast forward transform.
///
/// Dyadic ordering bit-reverses the input before the butterfly; Natural
/// ordering feeds the butterfly directly. Unnormalized: coefficient 0 is
/// the sum of the inputs.
pub fn fast_forward(v: &[f64], ordering: Ordering) -> WalshResult<Vec<f64>> {
    trace!(len = v.len(), ?ordering, "fast transform");
    let mut data = match ordering {
        Ordering::Dyadic => bit_reversal_permute(v)?,
        Ordering::Natural => {
            transform_order(v.len())?;
            v.to_vec()
        }
    };
    butterfly(&mut data);
    Ok(data)
}

/// Fast inverse transform: `fast_forward` scaled by `1/len`.
pub fn fast_inverse(coefficients: &[f64], ordering: Ordering) -> WalshResult<Vec<f64>> {
    let mut samples = fast_forward(coefficients, ordering)?;
    let scale = 1.0 / coefficients.len() as f64;
    for s in samples.iter_mut() {
        *s *= scale;
    }
    Ok(samples)
}

/// Fast forward transform over complex samples.
pub fn fast_forward_complex(v: &[Complex], ordering: Ordering) -> WalshResult<Vec<Complex>> {
    let bits = transform_order(v.len())?;
    let mut data = match ordering {
        Ordering::Dyadic => {
            let mut out = vec![Complex::new(0.0, 0.0); v.len()];
            for (i, &val) in v.iter().enumerate() {
                out[reverse_bits(i, bits)] = val;
            }
            out
        }
        Ordering::Natural => v.to_vec(),
    };
    butterfly_complex(&mut data);
    Ok(data)
}

/// Fast inverse transform over complex samples.
pub fn fast_inverse_complex(
    coefficients: &[Complex],
    ordering: Ordering,
) -> WalshResult<Vec<Complex>> {
    let mut samples = fast_forward_complex(coefficients, ordering)?;
    let scale = 1.0 / coefficients.len() as f64;
    for s in samples.iter_mut() {
        *s *= scale;
    }
    Ok(samples)
}
