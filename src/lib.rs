//! Localidad: memory-hierarchy teaching microbenchmarks.
//!
//! A set of small, deliberately cache-hostile (or cache-friendly) kernels
//! used to demonstrate locality, bandwidth, branch prediction, and TLB
//! effects, plus a CLI for post-processing the gem5 runs that simulate
//! them. Each kernel binary under `src/bin/` is a self-contained program:
//! it allocates fixed-size arrays, fills them deterministically, runs one
//! loop nest, and prints a timing line and a checksum.
//!
//! # Quick Start
//!
//! ```
//! use localidad::kernels::matmul;
//!
//! let (a, b, mut c) = matmul::init_naive_matrices();
//! matmul::multiply_naive(&a, &b, &mut c, matmul::NAIVE_DIM);
//! assert_eq!(c[0], 690_880.0);
//! ```
//!
//! # Modules
//!
//! - [`kernels`]: The benchmark loop nests and their initializers
//! - [`stats`]: gem5 `stats.txt` parsing and derived metrics
//! - [`report`]: Tabular analysis of collected simulation runs
//! - [`sweep`]: Sequential gem5 cache-configuration sweeps
//! - [`cli`]: The `lab_stats` command-line surface
//! - [`error`]: Crate-wide error type and `Result` alias

pub mod cli;
pub mod error;
pub mod kernels;
pub mod report;
pub mod stats;
pub mod sweep;

pub use error::{LocalidadError, Result};
