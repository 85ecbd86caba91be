//! End-to-end checksum tests for the benchmark kernels.
//!
//! Every kernel in this crate prints a checksum so that runs under a
//! simulator can be validated without inspecting timing. These tests pin
//! those checksums at the kernels' native sizes: the values are derived
//! analytically from the initializers, so a change in loop order,
//! initialization, or indexing shows up as a checksum mismatch.
//!
//! # Running
//! ```bash
//! cargo test --test kernel_checksums
//!
//! # The full-size kernels are slow without optimization:
//! cargo test --release --test kernel_checksums
//! ```

use localidad::kernels::{blur, branch, matmul, scatter, stream, tlb};

// ============================================================================
// MATRIX MULTIPLY
// ============================================================================

/// C[0][0] for the stack-style kernel is sum(k^2) for k < 128, exact in f32.
#[test]
fn naive_matmul_checksum() {
    let n = matmul::NAIVE_DIM;
    let (a, b, mut c) = matmul::init_naive_matrices();
    matmul::multiply_naive(&a, &b, &mut c, n);

    assert_eq!(c[0], 690_880.0);

    // Same accumulation order as the kernel, so equality is exact.
    let mut dot = 0.0f32;
    for k in 0..n {
        dot += a[k] * b[k * n];
    }
    assert_eq!(c[0], dot);
}

/// The heap kernel accumulates C[0][0] in ascending k as well, so a
/// straight dot product over the seeded inputs must match bit for bit.
#[test]
fn heap_matmul_first_element_matches_dot() {
    let n = matmul::HEAP_DIM;
    let mut rng = matmul::heap_rng();
    let a = matmul::random_heap_matrix(n, &mut rng);
    let b = matmul::random_heap_matrix(n, &mut rng);
    let mut c = matmul::zeroed_heap_matrix(n);

    matmul::multiply_heap_rows(&a, &b, &mut c, n);

    let mut dot = 0.0f64;
    for k in 0..n {
        dot += a[0][k] * b[k][0];
    }
    assert_eq!(c[0][0], dot);
}

// ============================================================================
// IMAGE BLUR
// ============================================================================

/// Interior pixels of the x+y gradient survive the blur unchanged until
/// the mod-256 wrap interferes; (100,100) is wrap-free, (200,200) is not.
#[test]
fn blur_checksums() {
    let width = blur::WIDTH;
    let height = blur::HEIGHT;
    let input = blur::init_image(width, height);
    let mut output = vec![0u8; width * height];
    blur::blur(&input, &mut output, width, height);

    assert_eq!(output[100 * width + 100], 200);
    assert_eq!(output[200 * width + 200], 144);

    // The two-pixel border is never written.
    assert_eq!(output[0], 0);
    assert_eq!(output[width + 1], 0);
    assert_eq!(output[(height - 1) * width + (width - 1)], 0);
}

// ============================================================================
// STREAM
// ============================================================================

/// The stream arrays stay uniform, so a scalar shadow of the four ops
/// predicts every element exactly. 7.75 = 31/4, and ten successive
/// multiplies keep the product within f64's 53-bit mantissa, so the
/// final values are exact, not approximate.
#[test]
fn stream_matches_scalar_shadow() {
    let mut a = vec![0.0f64; stream::ARRAY_SIZE];
    let mut b = vec![0.0f64; stream::ARRAY_SIZE];
    let mut c = vec![0.0f64; stream::ARRAY_SIZE];
    stream::init(&mut a, &mut b, &mut c);

    let (mut sa, mut sb, mut sc) = (1.0f64, 2.0f64, 0.0f64);
    for _ in 0..stream::REPEAT_COUNT {
        stream::run_rep(&mut a, &mut b, &mut c);
        sc = sa;
        sb = stream::SCALE_FACTOR * sc;
        sc = sa + sb;
        sa = sb + stream::TRIAD_SCALAR * sc;

        assert_eq!(a[0], sa);
        assert_eq!(a[100], sa);
        assert_eq!(a[stream::ARRAY_SIZE - 1], sa);
        assert_eq!(b[100], sb);
        assert_eq!(c[100], sc);
    }

    // a = 7.75^10 = 31^10 / 4^10, exactly representable in f64.
    assert_eq!(sa, 819_628_286_980_801.0 / 1_048_576.0);

    for (i, &x) in a.iter().enumerate() {
        assert_eq!(x, sa, "a[{i}] diverged from the scalar shadow");
    }
}

// ============================================================================
// BRANCH PREDICTION
// ============================================================================

/// a[i] - b[i] = i - 10000 is negative for every i < 10000, so the
/// predictable branch never takes the accumulate arm.
#[test]
fn predictable_branch_sum_is_zero() {
    let (a, b) = branch::init_diff_arrays();
    assert_eq!(branch::sum_positive_diffs(&a, &b), 0.0);
}

/// The random variant is deterministic under its fixed seed.
#[test]
fn random_branch_sum_is_stable() {
    let values = branch::random_values(branch::RAND_SIZE, &mut branch::value_rng());
    let again = branch::random_values(branch::RAND_SIZE, &mut branch::value_rng());
    assert_eq!(values, again);

    let sum = branch::sum_even(&values);
    assert_eq!(sum, branch::sum_even(&again));
    assert!(sum > 0);

    // Even values in 0..100 cap the sum at 98 per element.
    assert!(sum <= 98 * branch::RAND_SIZE as i32);
}

// ============================================================================
// TLB STRIDE
// ============================================================================

/// One page-strided element per iteration: table[n * STRIDE] = n * STRIDE,
/// so the walk sums STRIDE * (0 + 1 + ... + 9999) = 204,779,520,000.
#[test]
fn tlb_walk_checksum() {
    let table = tlb::init_table(tlb::table_len());
    let sum = tlb::blocked_stride_sum(&table, tlb::NUM_ACCESSES, tlb::BLOCK_SIZE, tlb::STRIDE);
    assert_eq!(sum, 204_779_520_000);
}

// ============================================================================
// SCATTER UPDATE
// ============================================================================

/// Scatter-add moves weight between slots but conserves the total:
/// sum(h) + sum(w) = 2 * sum(0..10000) = 10^8, exact in f64.
#[test]
fn scatter_conserves_total_weight() {
    let (mut h, w) = scatter::init_tables();
    let idx = scatter::random_indices(scatter::SIZE, scatter::SIZE, &mut scatter::index_rng());
    scatter::scatter_add(&mut h, &w, &idx);
    assert_eq!(scatter::table_sum(&h), 100_000_000.0);
}
