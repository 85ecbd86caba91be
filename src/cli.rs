//! The `lab_stats` command-line surface
//!
//! Four subcommands over gem5 output: `report` tabulates a metric across
//! collected runs, `keys` lists the stat keys a directory offers, `export`
//! emits plottable CSV or raw JSON, and `sweep` drives gem5 itself across
//! an L1D configuration grid.
//!
//! The functions here are plain library code so integration tests can call
//! them without spawning the binary.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{LocalidadError, Result};
use crate::report::{self, XAxis, YAxis};
use crate::stats::{self, RunRecord};
use crate::sweep::SweepPlan;

#[derive(Parser, Debug)]
#[command(name = "lab_stats")]
#[command(about = "Analyze gem5 simulation results for the locality kernels")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tabulate a metric across collected simulation runs
    Report {
        /// Directory containing simulation results
        results_dir: PathBuf,

        /// Independent variable (from result-directory names)
        #[arg(value_enum)]
        x_axis: XAxis,

        /// Dependent variable (derived from stats.txt)
        #[arg(value_enum)]
        y_axis: YAxis,

        /// Also print the cross-run analysis summary
        #[arg(long)]
        summary: bool,
    },

    /// List the stat keys available in a directory of stats files
    Keys {
        /// Directory containing stats*.txt files
        #[arg(default_value = ".")]
        path_dir: PathBuf,
    },

    /// Export grouped observations as CSV, or raw records as JSON
    Export {
        /// Directory containing simulation results
        results_dir: PathBuf,

        /// Independent variable
        #[arg(value_enum)]
        x_axis: XAxis,

        /// Dependent variable
        #[arg(value_enum)]
        y_axis: YAxis,

        /// Emit raw records as pretty-printed JSON instead of CSV
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run gem5 once per point of an L1D size x associativity grid
    Sweep {
        /// gem5 executable
        #[arg(long)]
        gem5: PathBuf,

        /// gem5 config script (consumes --binary, --l1d_size, --l1d_assoc)
        #[arg(long)]
        script: PathBuf,

        /// Kernel binary to simulate
        #[arg(long)]
        binary: PathBuf,

        /// L1D sizes to sweep, comma separated
        #[arg(long, value_delimiter = ',', default_value = "8kB,32kB,128kB")]
        l1d_sizes: Vec<String>,

        /// L1D associativities to sweep, comma separated
        #[arg(long, value_delimiter = ',', default_value = "2")]
        l1d_assocs: Vec<u32>,

        /// Root directory for per-point output directories
        #[arg(long, default_value = "results")]
        out_dir: PathBuf,
    },
}

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Propagates the failure of whichever subcommand ran.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report {
            results_dir,
            x_axis,
            y_axis,
            summary,
        } => run_report(&results_dir, x_axis, y_axis, summary),
        Command::Keys { path_dir } => run_keys(&path_dir),
        Command::Export {
            results_dir,
            x_axis,
            y_axis,
            json,
            output,
        } => run_export(&results_dir, x_axis, y_axis, json, output.as_deref()),
        Command::Sweep {
            gem5,
            script,
            binary,
            l1d_sizes,
            l1d_assocs,
            out_dir,
        } => run_sweep(SweepPlan {
            gem5_bin: gem5,
            config_script: script,
            binary,
            l1d_sizes,
            l1d_assocs,
            out_dir,
        }),
    }
}

fn load_records(results_dir: &Path) -> Result<Vec<RunRecord>> {
    let records = stats::collect_runs(results_dir)?;
    if records.is_empty() {
        return Err(LocalidadError::NoResults {
            dir: results_dir.display().to_string(),
        });
    }
    Ok(records)
}

/// `report`: the fixed-width table, optionally followed by the summary.
///
/// # Errors
///
/// Fails when the directory cannot be walked or holds no usable runs.
pub fn run_report(results_dir: &Path, x: XAxis, y: YAxis, with_summary: bool) -> Result<()> {
    println!("Analyzing results in: {}", results_dir.display());
    println!("X-axis: {x}");
    println!("Y-axis: {y}");

    let records = load_records(results_dir)?;
    print!("{}", report::render_table(&records, x, y));
    if with_summary {
        print!("{}", report::render_summary(&records));
    }
    Ok(())
}

/// `keys`: sorted union of stat keys under `path_dir`.
///
/// # Errors
///
/// Fails when the directory cannot be listed or holds no stats files.
pub fn run_keys(path_dir: &Path) -> Result<()> {
    let keys = stats::list_keys(path_dir)?;
    println!("Available stat keys:");
    for key in &keys {
        println!("  {key}");
    }
    Ok(())
}

/// `export`: CSV (grouped observations) or JSON (raw records), to stdout
/// or a file.
///
/// # Errors
///
/// Fails when no runs are found, records cannot be serialized, or the
/// output file cannot be written.
pub fn run_export(
    results_dir: &Path,
    x: XAxis,
    y: YAxis,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    let records = load_records(results_dir)?;
    let payload = if json {
        report::to_json(&records)?
    } else {
        report::to_csv(&records, x, y)
    };

    match output {
        Some(path) => {
            fs::write(path, payload)?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{payload}"),
    }
    Ok(())
}

/// `sweep`: run the grid and print the pass/fail summary.
///
/// # Errors
///
/// Fails when the grid is empty or gem5 cannot be launched.
pub fn run_sweep(plan: SweepPlan) -> Result<()> {
    log::info!(
        "sweeping {} over {} sizes x {} associativities",
        plan.kernel_name(),
        plan.l1d_sizes.len(),
        plan.l1d_assocs.len()
    );
    let summary = plan.run()?;
    print!("{}", summary.render());
    Ok(())
}
