//! Memory and branch behavior kernels
//!
//! Each submodule is a self-contained workload with its own constants and
//! init routines. The modules share no state and no traits, so every
//! executable stays a faithful standalone rendition of one loop nest.
//!
//! ## Modules
//!
//! - [`matmul`] - dense matrix multiply, flat and heap-per-row variants
//! - [`blur`] - 5x5 weighted blur over a column-major image walk
//! - [`stream`] - copy/scale/add/triad bandwidth passes
//! - [`branch`] - predictable and data-dependent branch loops
//! - [`tlb`] - page-stride blocked table walk
//! - [`scatter`] - random-index read-modify-write updates

pub mod blur;
pub mod branch;
pub mod matmul;
pub mod scatter;
pub mod stream;
pub mod tlb;
