//! Sequential gem5 cache-configuration sweeps
//!
//! Runs one gem5 simulation per point of an L1D size x associativity grid,
//! placing each run in its own `--outdir`. Directory names follow the
//! `<kernel>_<size>_assoc<N>` shape the stats collector parses, so a sweep
//! output tree feeds straight into `report`.
//!
//! gem5 is treated as an opaque external program. A point whose simulation
//! exits nonzero is recorded and the sweep moves on; only failure to launch
//! gem5 at all aborts the run.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use crate::error::{LocalidadError, Result};

/// One point of the sweep grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPoint {
    pub l1d_size: String,
    pub l1d_assoc: u32,
}

/// Outcome of one launched simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointResult {
    /// Directory basename, `<kernel>_<size>_assoc<N>`.
    pub label: String,
    pub outdir: PathBuf,
    pub success: bool,
}

/// Pass/fail record of a completed sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    pub results: Vec<PointResult>,
}

impl SweepSummary {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Per-point lines plus a totals footer.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let status = if result.success { "ok  " } else { "FAIL" };
            out.push_str(&format!("  {status}  {}\n", result.label));
        }
        out.push_str(&format!(
            "Sweep complete: {}/{} points succeeded\n",
            self.passed(),
            self.results.len()
        ));
        out
    }
}

/// A full sweep: which gem5, which config script, which kernel binary, and
/// the grid of L1D configurations to simulate.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub gem5_bin: PathBuf,
    pub config_script: PathBuf,
    pub binary: PathBuf,
    pub l1d_sizes: Vec<String>,
    pub l1d_assocs: Vec<u32>,
    pub out_dir: PathBuf,
}

impl SweepPlan {
    /// Kernel name used in output-directory labels, from the binary's
    /// file stem.
    #[must_use]
    pub fn kernel_name(&self) -> String {
        self.binary.file_stem().map_or_else(
            || "kernel".to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
    }

    /// The size x associativity grid, sizes outermost, in input order.
    #[must_use]
    pub fn points(&self) -> Vec<SweepPoint> {
        let mut points = Vec::with_capacity(self.l1d_sizes.len() * self.l1d_assocs.len());
        for size in &self.l1d_sizes {
            for &assoc in &self.l1d_assocs {
                points.push(SweepPoint {
                    l1d_size: size.clone(),
                    l1d_assoc: assoc,
                });
            }
        }
        points
    }

    /// Label for one point, `<kernel>_<size>_assoc<N>`.
    #[must_use]
    pub fn label_for(&self, point: &SweepPoint) -> String {
        format!(
            "{}_{}_assoc{}",
            self.kernel_name(),
            point.l1d_size,
            point.l1d_assoc
        )
    }

    /// Output directory for one point.
    #[must_use]
    pub fn outdir_for(&self, point: &SweepPoint) -> PathBuf {
        self.out_dir.join(self.label_for(point))
    }

    /// The gem5 invocation for one point. `--outdir` is a gem5 flag and
    /// precedes the config script; the remaining flags are consumed by the
    /// script itself.
    #[must_use]
    pub fn command_for(&self, point: &SweepPoint) -> Command {
        let mut cmd = Command::new(&self.gem5_bin);
        cmd.arg("--outdir")
            .arg(self.outdir_for(point))
            .arg(&self.config_script)
            .arg("--binary")
            .arg(&self.binary)
            .arg("--l1d_size")
            .arg(&point.l1d_size)
            .arg("--l1d_assoc")
            .arg(point.l1d_assoc.to_string());
        cmd
    }

    /// Run every point sequentially, inheriting gem5's stdout/stderr.
    ///
    /// # Errors
    ///
    /// Returns [`LocalidadError::Sweep`] when the grid is empty or gem5
    /// cannot be launched, and an I/O error when the output root cannot be
    /// created.
    pub fn run(&self) -> Result<SweepSummary> {
        let points = self.points();
        if points.is_empty() {
            return Err(LocalidadError::Sweep {
                reason: "empty sweep grid (no sizes or no associativities)".to_string(),
            });
        }

        fs::create_dir_all(&self.out_dir)?;

        let mut summary = SweepSummary::default();
        for (index, point) in points.iter().enumerate() {
            let label = self.label_for(point);
            log::info!(
                "point {}/{}: l1d_size={} l1d_assoc={}",
                index + 1,
                points.len(),
                point.l1d_size,
                point.l1d_assoc
            );

            let started = Instant::now();
            let status = self.command_for(point).status().map_err(|err| {
                LocalidadError::Sweep {
                    reason: format!("could not launch {}: {err}", self.gem5_bin.display()),
                }
            })?;
            let elapsed = started.elapsed();

            if status.success() {
                log::info!("{label} finished in {:.1}s", elapsed.as_secs_f64());
            } else {
                log::warn!("{label} exited with {status}");
            }
            summary.results.push(PointResult {
                label,
                outdir: self.outdir_for(point),
                success: status.success(),
            });
        }
        Ok(summary)
    }
}
