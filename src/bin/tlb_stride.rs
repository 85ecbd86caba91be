//! Page-stride blocked walk: every strided read lands on a fresh page.

use std::time::Instant;

use localidad::kernels::tlb;

fn main() {
    let table = tlb::init_table(tlb::table_len());

    let start = Instant::now();
    let sum = tlb::blocked_stride_sum(&table, tlb::NUM_ACCESSES, tlb::BLOCK_SIZE, tlb::STRIDE);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Blocked stride walk completed in {elapsed:.6} seconds");
    println!("Sum = {sum}");
}
