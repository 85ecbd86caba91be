//! Random scatter updates through an index table, defeating the prefetcher
//! with every write.

use std::time::Instant;

use localidad::kernels::scatter;

fn main() {
    let (mut h, w) = scatter::init_tables();
    let mut rng = scatter::index_rng();
    let idx = scatter::random_indices(scatter::SIZE, scatter::SIZE, &mut rng);

    let start = Instant::now();
    scatter::scatter_add(&mut h, &w, &idx);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Scatter update completed in {elapsed:.6} seconds");
    println!("Result checksum: sum(h) = {:.6}", scatter::table_sum(&h));
    println!("Done.");
}
