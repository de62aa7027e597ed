//! Walsh Matrix Generation
//!
//! Builds the full `2^k × 2^k` ±1 Walsh matrix in either ordering. Row `i`
//! holds the samples of Walsh function `i` over `2^k` equal subintervals of
//! `[0, 1)`. Entries are stored as `i8`, so a matrix is exact integer data;
//! orthogonality `W · Wᵀ = 2^k · I` holds without rounding.
//!
//! Both constructions run iteratively with a growing buffer rather than by
//! recursion:
//!
//! - **Dyadic**: each doubling step interleaves — row `2i` of the new
//!   matrix is `[Mᵢ, Mᵢ]` and row `2i+1` is `[Mᵢ, -Mᵢ]`. The interleaving
//!   is what keeps rows nested across sizes.
//! - **Natural**: each doubling step stacks the standard Hadamard blocks
//!   `[[H, H], [H, -H]]`.
//!
//! ## Example
//!
//! ```rust
//! use walsh_dsp::matrix::WalshMatrix;
//! use walsh_dsp::Ordering;
//!
//! let w = WalshMatrix::generate(1, Ordering::Dyadic).unwrap();
//! assert_eq!(w.row(0), &[1, 1]);
//! assert_eq!(w.row(1), &[1, -1]);
//! ```

use crate::types::{Ordering, WalshError, WalshResult};
use tracing::trace;

/// A `2^k × 2^k` matrix over {-1, +1}, stored row-major as `i8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalshMatrix {
    order: u32,
    size: usize,
    data: Vec<i8>,
}

impl WalshMatrix {
    /// Largest supported order. A matrix at this order occupies
    /// `2^30` bytes; anything beyond is refused rather than allocated.
    pub const MAX_ORDER: u32 = 15;

    /// Build the `2^order × 2^order` Walsh matrix in the given ordering.
    ///
    /// `order = 0` yields `[[1]]` for both orderings.
    pub fn generate(order: u32, ordering: Ordering) -> WalshResult<Self> {
        if order > Self::MAX_ORDER {
            return Err(WalshError::OrderTooLarge {
                order,
                max: Self::MAX_ORDER,
            });
        }
        trace!(order, ?ordering, "generating Walsh matrix");
        Ok(match ordering {
            Ordering::Dyadic => Self::generate_dyadic(order),
            Ordering::Natural => Self::generate_natural(order),
        })
    }

    fn generate_dyadic(order: u32) -> Self {
        let mut data = vec![1i8];
        let mut len = 1usize;
        for _ in 0..order {
            let next_len = len * 2;
            let mut next = vec![0i8; next_len * next_len];
            for i in 0..len {
                for j in 0..len {
                    let v = data[i * len + j];
                    next[2 * i * next_len + j] = v;
                    next[2 * i * next_len + len + j] = v;
                    next[(2 * i + 1) * next_len + j] = v;
                    next[(2 * i + 1) * next_len + len + j] = -v;
                }
            }
            data = next;
            len = next_len;
        }
        Self {
            order,
            size: len,
            data,
        }
    }

    fn generate_natural(order: u32) -> Self {
        let size = 1usize << order;
        let mut data = vec![0i8; size * size];
        data[0] = 1;
        let mut len = 1usize;
        while len < size {
            for i in 0..len {
                for j in 0..len {
                    let v = data[i * size + j];
                    data[i * size + len + j] = v;
                    data[(i + len) * size + j] = v;
                    data[(i + len) * size + len + j] = -v;
                }
            }
            len *= 2;
        }
        Self { order, size, data }
    }

    /// Matrix order `k` (the size is `2^k`).
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.data[row * self.size + col]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[i8] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(w: &WalshMatrix) -> Vec<i8> {
        (0..w.size())
            .flat_map(|i| w.row(i).to_vec())
            .collect()
    }

    #[test]
    fn test_order_zero_is_unit() {
        for ordering in [Ordering::Dyadic, Ordering::Natural] {
            let w = WalshMatrix::generate(0, ordering).unwrap();
            assert_eq!(w.size(), 1);
            assert_eq!(w.get(0, 0), 1);
        }
    }

    #[test]
    fn test_dyadic_matrices() {
        let w1 = WalshMatrix::generate(1, Ordering::Dyadic).unwrap();
        assert_eq!(flat(&w1), vec![1, 1, 1, -1]);

        let w2 = WalshMatrix::generate(2, Ordering::Dyadic).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            1,  1,  1,  1,
            1,  1, -1, -1,
            1, -1,  1, -1,
            1, -1, -1,  1,
        ];
        assert_eq!(flat(&w2), expected);
    }

    #[test]
    fn test_natural_matrices() {
        let w1 = WalshMatrix::generate(1, Ordering::Natural).unwrap();
        assert_eq!(flat(&w1), vec![1, 1, 1, -1]);

        let w2 = WalshMatrix::generate(2, Ordering::Natural).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            1,  1,  1,  1,
            1, -1,  1, -1,
            1,  1, -1, -1,
            1, -1, -1,  1,
        ];
        assert_eq!(flat(&w2), expected);
    }

    #[test]
    fn test_row_zero_all_ones() {
        for ordering in [Ordering::Dyadic, Ordering::Natural] {
            let w = WalshMatrix::generate(4, ordering).unwrap();
            assert!(w.row(0).iter().all(|&v| v == 1));
        }
    }

    #[test]
    fn test_orthogonality() {
        for ordering in [Ordering::Dyadic, Ordering::Natural] {
            for order in 0..6 {
                let w = WalshMatrix::generate(order, ordering).unwrap();
                let n = w.size();
                for i in 0..n {
                    for j in 0..n {
                        let dot: i32 = (0..n)
                            .map(|l| i32::from(w.get(i, l)) * i32::from(w.get(j, l)))
                            .sum();
                        let expected = if i == j { n as i32 } else { 0 };
                        assert_eq!(dot, expected, "order {} rows {} {}", order, i, j);
                    }
                }
            }
        }
    }

    #[test]
    fn test_orderings_related_by_bit_reversal() {
        let order = 3;
        let size = 1usize << order;
        let dyadic = WalshMatrix::generate(order, Ordering::Dyadic).unwrap();
        let natural = WalshMatrix::generate(order, Ordering::Natural).unwrap();
        for i in 0..size {
            let mut rev = 0usize;
            let mut v = i;
            for _ in 0..order {
                rev = (rev << 1) | (v & 1);
                v >>= 1;
            }
            assert_eq!(dyadic.row(i), natural.row(rev), "row {}", i);
        }
    }

    #[test]
    fn test_order_cap() {
        assert!(matches!(
            WalshMatrix::generate(16, Ordering::Dyadic),
            Err(WalshError::OrderTooLarge { order: 16, max: 15 })
        ));
    }
}
