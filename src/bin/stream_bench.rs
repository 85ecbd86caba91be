//! STREAM-style bandwidth run: ten copy/scale/add/triad cycles over three
//! 1M-element arrays.

use std::process;
use std::time::Instant;

use localidad::kernels::stream;

fn main() {
    let allocated = (
        stream::try_alloc_array(stream::ARRAY_SIZE),
        stream::try_alloc_array(stream::ARRAY_SIZE),
        stream::try_alloc_array(stream::ARRAY_SIZE),
    );
    let (Ok(mut a), Ok(mut b), Ok(mut c)) = allocated else {
        println!("Memory allocation failed");
        process::exit(1);
    };

    stream::init(&mut a, &mut b, &mut c);

    let start = Instant::now();
    for _ in 0..stream::REPEAT_COUNT {
        stream::run_rep(&mut a, &mut b, &mut c);
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("Stream benchmark completed in {elapsed:.6} seconds");
    println!(
        "Final result checksum: a[100] = {:.6}, b[100] = {:.6}",
        a[100], b[100]
    );

    let total_bytes = (stream::ARRAY_SIZE
        * std::mem::size_of::<f64>()
        * stream::ARRAYS_TOUCHED_PER_REP
        * stream::REPEAT_COUNT) as f64;
    let bandwidth_gb_s = total_bytes / (1024.0 * 1024.0 * 1024.0) / elapsed;
    println!("Approximate memory bandwidth: {bandwidth_gb_s:.2} GB/s");
}
