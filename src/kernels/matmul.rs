//! Matrix-multiply kernels for cache-locality experiments
//!
//! Two deliberately un-tuned variants:
//! - [`multiply_naive`]: the textbook i-j-k loop nest over contiguous
//!   row-major `f32` matrices; the innermost `k` walks a column of B
//!   (one cache line touched per iteration).
//! - [`multiply_heap_rows`]: i-k-j order over `f64` matrices built from
//!   one heap allocation per row, so every row access chases a pointer and
//!   rows land wherever the allocator put them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use localidad::kernels::matmul;
//!
//! let (a, b, mut c) = matmul::init_naive_matrices();
//! matmul::multiply_naive(&a, &b, &mut c, matmul::NAIVE_DIM);
//! assert_eq!(c[0], 690_880.0);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length of the contiguous `f32` variant.
pub const NAIVE_DIM: usize = 128;

/// Side length of the per-row-heap `f64` variant.
pub const HEAP_DIM: usize = 256;

/// Fixed seed for reproducible random matrices.
pub const HEAP_SEED: u64 = 42;

/// Build the three matrices for the naive variant.
///
/// `a[i][j] = i + j`, `b[i][j] = i - j`, `c` zeroed; all flat row-major,
/// [`NAIVE_DIM`] on a side.
#[must_use]
pub fn init_naive_matrices() -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let n = NAIVE_DIM;
    let mut a = vec![0.0f32; n * n];
    let mut b = vec![0.0f32; n * n];
    let c = vec![0.0f32; n * n];

    for i in 0..n {
        for j in 0..n {
            a[i * n + j] = (i + j) as f32;
            b[i * n + j] = i as f32 - j as f32;
        }
    }

    (a, b, c)
}

/// Naive i-j-k matrix multiplication, `c += a * b`.
///
/// The innermost loop strides `b` by a full row length per step, touching a
/// new cache line on every iteration.
///
/// # Arguments
///
/// * `a`, `b` - Input matrices, flat row-major `n * n`
/// * `c` - Accumulator matrix, flat row-major `n * n`
/// * `n` - Side length
///
/// # Panics
///
/// Panics if any slice is shorter than `n * n`.
pub fn multiply_naive(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// Allocate an `n × n` matrix as one heap allocation per row, zero-filled.
///
/// This mirrors the `double**` layout of the original lab handout: rows are
/// not contiguous with each other.
#[must_use]
pub fn zeroed_heap_matrix(n: usize) -> Vec<Vec<f64>> {
    vec![vec![0.0f64; n]; n]
}

/// Allocate an `n × n` per-row-heap matrix with elements drawn from a
/// seeded PRNG, one of `{0.0, 0.1, …, 9.9}` each.
#[must_use]
pub fn random_heap_matrix(n: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| f64::from(rng.gen_range(0..100)) / 10.0)
                .collect()
        })
        .collect()
}

/// Seeded PRNG for the heap-matrix variant.
#[must_use]
pub fn heap_rng() -> StdRng {
    StdRng::seed_from_u64(HEAP_SEED)
}

/// i-k-j matrix multiplication over per-row-heap matrices, `c += a * b`.
///
/// Every element access indexes through a row pointer; the j loop being
/// innermost keeps `b`'s walk row-wise, so the cache pressure here comes
/// from the non-contiguous rows rather than the loop order.
///
/// # Panics
///
/// Panics if any matrix has fewer than `n` rows or a row shorter than `n`.
pub fn multiply_heap_rows(a: &[Vec<f64>], b: &[Vec<f64>], c: &mut [Vec<f64>], n: usize) {
    for i in 0..n {
        for k in 0..n {
            for j in 0..n {
                c[i][j] += a[i][k] * b[k][j];
            }
        }
    }
}
