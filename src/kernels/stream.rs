//! STREAM-style memory bandwidth kernels
//!
//! The four classic operations (copy, scale, add, triad) over three 1M-element
//! `f64` arrays. Every loop is a straight pass over contiguous memory; the
//! interesting number is bytes moved per second, not arithmetic.
//!
//! ## Example
//!
//! ```rust,ignore
//! use localidad::kernels::stream;
//!
//! let mut a = vec![0.0; stream::ARRAY_SIZE];
//! let mut b = vec![0.0; stream::ARRAY_SIZE];
//! let mut c = vec![0.0; stream::ARRAY_SIZE];
//! stream::init(&mut a, &mut b, &mut c);
//! stream::triad(&mut a, &b, &c, stream::TRIAD_SCALAR);
//! ```

use std::collections::TryReserveError;

/// Elements per array (1M).
pub const ARRAY_SIZE: usize = 1024 * 1024;

/// Full copy/scale/add/triad cycles per run.
pub const REPEAT_COUNT: usize = 10;

/// Scalar for the scale pass.
pub const SCALE_FACTOR: f64 = 2.5;

/// Scalar for the triad pass.
pub const TRIAD_SCALAR: f64 = 1.5;

/// Distinct array traversals per repetition (2 copy + 2 scale + 3 add
/// + 3 triad), used for the bandwidth estimate.
pub const ARRAYS_TOUCHED_PER_REP: usize = 10;

/// Allocate a zero-filled array, reporting allocation failure instead of
/// aborting.
///
/// # Errors
///
/// Returns the underlying [`TryReserveError`] when the allocator cannot
/// provide `len` elements.
pub fn try_alloc_array(len: usize) -> Result<Vec<f64>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0.0);
    Ok(v)
}

/// `a = 1.0, b = 2.0, c = 0.0` element-wise.
pub fn init(a: &mut [f64], b: &mut [f64], c: &mut [f64]) {
    a.fill(1.0);
    b.fill(2.0);
    c.fill(0.0);
}

/// `dst[i] = src[i]`
pub fn copy(src: &[f64], dst: &mut [f64]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s;
    }
}

/// `dst[i] = scalar * src[i]`
pub fn scale(src: &[f64], dst: &mut [f64], scalar: f64) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = scalar * s;
    }
}

/// `dst[i] = a[i] + b[i]`
pub fn add(a: &[f64], b: &[f64], dst: &mut [f64]) {
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x + y;
    }
}

/// `a[i] = b[i] + scalar * c[i]`
pub fn triad(a: &mut [f64], b: &[f64], c: &[f64], scalar: f64) {
    for ((x, &y), &z) in a.iter_mut().zip(b).zip(c) {
        *x = y + scalar * z;
    }
}

/// One full lab repetition: `copy(a→c); scale(c→b); add(a+b→c); triad(a)`.
pub fn run_rep(a: &mut [f64], b: &mut [f64], c: &mut [f64]) {
    copy(a, c);
    scale(c, b, SCALE_FACTOR);
    add(a, b, c);
    triad(a, b, c, TRIAD_SCALAR);
}
