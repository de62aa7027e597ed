//! # Walsh Transform DSP Library
//!
//! This crate computes discrete Walsh functions and Walsh-Hadamard
//! transforms: basis-function evaluation, full ±1 Walsh matrices in two
//! orderings, forward/inverse transforms over a naive O(n²) matrix path
//! and an O(n log n) fast butterfly path, and reconstruction of continuous
//! functions from truncated Walsh-series coefficients.
//!
//! ## Overview
//!
//! Walsh functions are a complete orthogonal basis of square waves on
//! `[0, 1)` taking values in {-1, +1} — the sequency-domain analogue of
//! sinusoids, with the fast Walsh-Hadamard transform (FWHT) playing the
//! role of the FFT but needing only additions and subtractions.
//!
//! - **Basis**: pointwise Walsh functions, the triangular "sequency-one"
//!   antiderivative family, and higher Cauchy-integral antiderivatives
//! - **Matrices**: exact `2^k × 2^k` ±1 matrices, Dyadic or Natural
//!   (Hadamard) ordered
//! - **Transforms**: matrix-based reference path and the bit-reversal +
//!   butterfly fast path, for real and complex samples
//! - **Sobolev pipeline**: transform a function's finite-difference
//!   derivative, reconstruct a piecewise-linear interpolant by integration
//! - **Series**: individual coefficients at arbitrary (non-power-of-two)
//!   indices and truncated-series evaluation
//!
//! ## Signal Flow
//!
//! ```text
//! discrete:    samples ──bit-reversal──▶ butterfly ──▶ coefficients
//!                 ▲                                        │
//!                 └──────────── scale by 1/n ◀─────────────┘
//!
//! continuous:  f ──difference──▶ FWHT ──▶ coefficients
//!                                             │ inverse FWHT
//!              interpolant ◀──accumulate── increments
//! ```
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::{fast_forward, fast_inverse, Ordering};
//!
//! let signal = vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];
//! let coeffs = fast_forward(&signal, Ordering::Natural).unwrap();
//! assert_eq!(coeffs, vec![4.0, 2.0, 0.0, -2.0, 0.0, 2.0, 0.0, 2.0]);
//!
//! let restored = fast_inverse(&coeffs, Ordering::Natural).unwrap();
//! assert_eq!(restored, signal);
//! ```
//!
//! Every operation is a deterministic pure function of its inputs with no
//! shared state, so the whole crate is safe to call concurrently as long
//! as each call owns its buffers.

pub mod basis;
pub mod binary;
pub mod fast;
pub mod matrix;
pub mod quadrature;
pub mod series;
pub mod slow;
pub mod sobolev;
pub mod types;

pub use basis::{Antiderivative, OneKFunction, WalshFunction};
pub use fast::{
    bit_reversal_permute, butterfly, butterfly_complex, fast_forward, fast_forward_complex,
    fast_inverse, fast_inverse_complex,
};
pub use matrix::WalshMatrix;
pub use quadrature::{integrate, QuadratureRule};
pub use series::{coefficient_one_k, coefficient_one_k_quadrature, WalshSeries};
pub use slow::PartialSum;
pub use sobolev::{sobolev_forward, sobolev_inverse, PiecewiseLinear};
pub use types::{Complex, Ordering, Sample, WalshError, WalshResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::basis::{OneKFunction, WalshFunction};
    pub use crate::fast::{fast_forward, fast_inverse};
    pub use crate::matrix::WalshMatrix;
    pub use crate::series::{coefficient_one_k, WalshSeries};
    pub use crate::sobolev::{sobolev_forward, sobolev_inverse, PiecewiseLinear};
    pub use crate::types::{Ordering, WalshError, WalshResult};
}
