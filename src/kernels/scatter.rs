//! Random scatter-update kernel
//!
//! Read-modify-write through a table of random indices. The histogram table
//! is small enough to cache, but the access order defeats the prefetcher
//! and serializes on store-to-load forwarding for repeated slots.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Elements in the histogram and weight tables.
pub const SIZE: usize = 10_000;

/// Seed for the index stream.
pub const SEED: u64 = 42;

/// Histogram `h[i] = i` and weights `w[i] = n - i`.
#[must_use]
pub fn init_tables() -> (Vec<f32>, Vec<f32>) {
    let n = SIZE;
    let h = (0..n).map(|i| i as f32).collect();
    let w = (0..n).map(|i| (n - i) as f32).collect();
    (h, w)
}

/// Seeded generator for the index stream.
#[must_use]
pub fn index_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `len` uniform indices in `0..max`.
#[must_use]
pub fn random_indices(len: usize, max: usize, rng: &mut StdRng) -> Vec<usize> {
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

/// `h[idx[i]] += w[i]` for every position.
pub fn scatter_add(h: &mut [f32], w: &[f32], idx: &[usize]) {
    for (&slot, &weight) in idx.iter().zip(w) {
        h[slot] += weight;
    }
}

/// Sum of the histogram, accumulated in `f64` so the total stays exact for
/// integer-valued tables.
#[must_use]
pub fn table_sum(h: &[f32]) -> f64 {
    h.iter().map(|&x| f64::from(x)).sum()
}
