//! 5×5 box-weighted image blur with a column-major traversal
//!
//! Both the image walk and the convolution's inner loops are transposed
//! (x outer, y inner), so consecutive accesses jump a whole image row,
//! which is the cache-hostile pattern this kernel exists to demonstrate.

/// Image width in pixels.
pub const WIDTH: usize = 512;

/// Image height in pixels.
pub const HEIGHT: usize = 512;

/// Convolution kernel side length.
pub const KERNEL_SIZE: usize = 5;

/// Integer blur weights; they sum to [`KERNEL_SUM`].
pub const KERNEL: [[u32; KERNEL_SIZE]; KERNEL_SIZE] = [
    [1, 1, 1, 1, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 3, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 1, 1, 1, 1],
];

/// Normalization divisor for the weighted sum.
pub const KERNEL_SUM: u32 = 35;

/// Build a `width × height` grayscale image, `image[y][x] = (x + y) % 256`,
/// filled column-by-column.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn init_image(width: usize, height: usize) -> Vec<u8> {
    let mut image = vec![0u8; width * height];
    for x in 0..width {
        for y in 0..height {
            image[y * width + x] = ((x + y) % 256) as u8;
        }
    }
    image
}

/// Apply the 5×5 blur over the image interior, column-major.
///
/// Border pixels (within [`KERNEL_SIZE`]`/2` of an edge) are left untouched.
/// Each output pixel is the weighted neighborhood sum divided by
/// [`KERNEL_SUM`] with integer truncation.
///
/// # Panics
///
/// Panics if either slice is shorter than `width * height`.
#[allow(clippy::cast_possible_truncation)]
pub fn blur(input: &[u8], output: &mut [u8], width: usize, height: usize) {
    let offset = KERNEL_SIZE / 2;

    for x in offset..width - offset {
        for y in offset..height - offset {
            let mut sum = 0u32;

            for kx in 0..KERNEL_SIZE {
                for ky in 0..KERNEL_SIZE {
                    let px = x + kx - offset;
                    let py = y + ky - offset;
                    sum += u32::from(input[py * width + px]) * KERNEL[ky][kx];
                }
            }

            output[y * width + x] = (sum / KERNEL_SUM) as u8;
        }
    }
}
