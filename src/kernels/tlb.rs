//! Page-stride access kernel
//!
//! Reads one `i32` every [`STRIDE`] elements (16 KiB apart), so consecutive
//! accesses land on distinct pages and distinct cache lines. Walking the
//! table in blocks keeps the reach of each burst bounded, which is what the
//! TLB experiments vary.

/// Elements between touched slots. 4096 ints is 16 KiB.
pub const STRIDE: usize = 4096;

/// Strided slots read per run.
pub const NUM_ACCESSES: usize = 10_000;

/// Slots per burst before the walk moves on.
pub const BLOCK_SIZE: usize = 64;

/// Backing table length for the full-size run.
#[must_use]
pub const fn table_len() -> usize {
    NUM_ACCESSES * STRIDE
}

/// Table filled with its own indices, `table[i] = i`.
#[must_use]
pub fn init_table(len: usize) -> Vec<i32> {
    (0..len).map(|i| i as i32).collect()
}

/// Sum the strided slots in blocks of `block` slots.
///
/// The final block is clamped to `slots`, so a slot count that is not a
/// multiple of `block` never reads past the table.
#[must_use]
pub fn blocked_stride_sum(table: &[i32], slots: usize, block: usize, stride: usize) -> i64 {
    let mut sum = 0i64;
    for block_start in (0..slots).step_by(block) {
        let block_end = (block_start + block).min(slots);
        for slot in block_start..block_end {
            sum += i64::from(table[slot * stride]);
        }
    }
    sum
}
