//! Branch predictability kernels
//!
//! Two loops with identical memory behavior and very different branch
//! behavior. The difference sum takes the same side of its comparison on
//! every iteration, so the predictor locks on after a handful of misses.
//! The even-value sum branches on uniformly random data and stays near the
//! 50% mispredict floor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Elements in the difference-sum arrays.
pub const DIFF_SIZE: usize = 10_000;

/// Elements in the random even-sum array.
pub const RAND_SIZE: usize = 100_000;

/// Seed for the random even-sum input.
pub const SEED: u64 = 42;

/// Build the two ramps for the predictable-branch loop: `a[i] = i / 2`
/// and `b[i] = n - i / 2`, so `a[i] - b[i]` is negative throughout.
#[must_use]
pub fn init_diff_arrays() -> (Vec<f32>, Vec<f32>) {
    let n = DIFF_SIZE;
    let mut a = vec![0.0f32; n];
    let mut b = vec![0.0f32; n];
    for i in 0..n {
        a[i] = i as f32 * 0.5;
        b[i] = n as f32 - i as f32 * 0.5;
    }
    (a, b)
}

/// Sum of `a[i] - b[i]` over the elements where the difference is positive.
#[must_use]
pub fn sum_positive_diffs(a: &[f32], b: &[f32]) -> f32 {
    let mut sum = 0.0f32;
    for (&x, &y) in a.iter().zip(b) {
        let diff = x - y;
        if diff > 0.0 {
            sum += diff;
        }
    }
    sum
}

/// Seeded generator for the random even-sum input.
#[must_use]
pub fn value_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `len` uniform values in `0..100`.
#[must_use]
pub fn random_values(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..100)).collect()
}

/// Sum of the even elements. The parity test is unpredictable when the
/// input is random.
#[must_use]
pub fn sum_even(values: &[i32]) -> i32 {
    let mut sum = 0;
    for &v in values {
        if v % 2 == 0 {
            sum += v;
        }
    }
    sum
}
