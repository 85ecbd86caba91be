//! 256x256 matrix multiply over per-row heap matrices.
//!
//! Each row is a separate allocation, so the multiply chases pointers
//! instead of streaming one contiguous block.

use std::time::Instant;

use localidad::kernels::matmul;

fn main() {
    let mut rng = matmul::heap_rng();
    let a = matmul::random_heap_matrix(matmul::HEAP_DIM, &mut rng);
    let b = matmul::random_heap_matrix(matmul::HEAP_DIM, &mut rng);
    let mut c = matmul::zeroed_heap_matrix(matmul::HEAP_DIM);

    let start = Instant::now();
    matmul::multiply_heap_rows(&a, &b, &mut c, matmul::HEAP_DIM);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Matrix multiplication completed in {elapsed:.6} seconds");
    println!(
        "Result checksum: C[0][0] = {:.6}, C[100][100] = {:.6}",
        c[0][0], c[100][100]
    );
}
