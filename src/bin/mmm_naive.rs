//! Naive 128x128 matrix multiply with the textbook i-j-k loop order.
//!
//! The innermost loop walks B column-wise, so every step of the dot
//! product touches a new cache line.

use std::time::Instant;

use localidad::kernels::matmul;

fn main() {
    // Initialization is part of the timed region.
    let start = Instant::now();
    let (a, b, mut c) = matmul::init_naive_matrices();
    matmul::multiply_naive(&a, &b, &mut c, matmul::NAIVE_DIM);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "Done MMM Naive. C[0][0]={:.6} Time={:.2} ms",
        c[0], elapsed_ms
    );
}
