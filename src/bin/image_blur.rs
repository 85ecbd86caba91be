//! 5x5 weighted blur over a 512x512 grayscale image, walked column-major.

use std::time::Instant;

use localidad::kernels::blur;

fn main() {
    let input = blur::init_image(blur::WIDTH, blur::HEIGHT);
    let mut output = vec![0u8; blur::WIDTH * blur::HEIGHT];

    let start = Instant::now();
    blur::blur(&input, &mut output, blur::WIDTH, blur::HEIGHT);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Image blur completed in {elapsed:.6} seconds");
    println!(
        "Result checksum: output[100][100] = {}, output[200][200] = {}",
        output[100 * blur::WIDTH + 100],
        output[200 * blur::WIDTH + 200]
    );
}
