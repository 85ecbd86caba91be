//! Fully predictable branch: the difference ramp never goes positive, so
//! the guard takes the same side on every iteration.

use std::time::Instant;

use localidad::kernels::branch;

fn main() {
    let (a, b) = branch::init_diff_arrays();

    let start = Instant::now();
    let sum = branch::sum_positive_diffs(&a, &b);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Branch sum completed in {elapsed:.6} seconds");
    println!("Result: {sum:.6}");
}
