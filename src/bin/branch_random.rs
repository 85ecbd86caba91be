//! Data-dependent branch: summing the even values of a random array keeps
//! the predictor near its mispredict floor.

use std::time::Instant;

use localidad::kernels::branch;

fn main() {
    let mut rng = branch::value_rng();
    let values = branch::random_values(branch::RAND_SIZE, &mut rng);

    let start = Instant::now();
    let sum = branch::sum_even(&values);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Random branch sum completed in {elapsed:.6} seconds");
    println!("Sum = {sum}");
}
