//! Tabular analysis of collected simulation runs
//!
//! Groups parsed runs per application and per cache configuration, then
//! renders fixed-width tables, a cross-run summary, or plottable CSV/JSON.
//! Missing metrics report as zero so sparse result trees still tabulate.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use clap::ValueEnum;

use crate::error::Result;
use crate::stats::{CacheLevel, RunRecord};

/// Independent variable of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum XAxis {
    /// L1 data cache size token from the result directory name.
    L1dSize,
    /// L1 data cache associativity.
    L1dAssoc,
}

impl XAxis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            XAxis::L1dSize => "l1d-size",
            XAxis::L1dAssoc => "l1d-assoc",
        }
    }
}

impl fmt::Display for XAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependent variable of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YAxis {
    Ipc,
    L1dMissRate,
    L2MissRate,
    ExecutionTime,
}

impl YAxis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            YAxis::Ipc => "ipc",
            YAxis::L1dMissRate => "l1d-miss-rate",
            YAxis::L2MissRate => "l2-miss-rate",
            YAxis::ExecutionTime => "execution-time",
        }
    }
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric sort key for configuration labels: leading digits, so cache
/// sizes order `8kB < 32kB < 128kB`. Labels without digits go last.
#[must_use]
pub fn config_sort_key(value: &str) -> u64 {
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(u64::MAX)
}

fn application_of(record: &RunRecord) -> String {
    record
        .config
        .application
        .clone()
        .unwrap_or_else(|| "unknown".to_string())
}

fn x_value(record: &RunRecord, x: XAxis) -> String {
    match x {
        XAxis::L1dSize => record
            .config
            .cache_size
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        XAxis::L1dAssoc => record
            .config
            .associativity
            .map_or_else(|| "unknown".to_string(), |a| a.to_string()),
    }
}

fn y_value(record: &RunRecord, y: YAxis) -> f64 {
    match y {
        YAxis::Ipc => record.stats.ipc(),
        YAxis::L1dMissRate => record.stats.miss_rate(CacheLevel::L1d),
        YAxis::L2MissRate => record.stats.miss_rate(CacheLevel::L2),
        YAxis::ExecutionTime => record.stats.execution_time(),
    }
    .unwrap_or(0.0)
}

/// Per application, per x-value, the observed y values.
///
/// Applications sort alphabetically; the configurations inside each
/// application sort numerically via [`config_sort_key`].
#[must_use]
pub fn group_records(
    records: &[RunRecord],
    x: XAxis,
    y: YAxis,
) -> BTreeMap<String, Vec<(String, Vec<f64>)>> {
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(application_of(record))
            .or_default()
            .entry(x_value(record, x))
            .or_default()
            .push(y_value(record, y));
    }

    grouped
        .into_iter()
        .map(|(app, configs)| {
            let mut rows: Vec<(String, Vec<f64>)> = configs.into_iter().collect();
            rows.sort_by(|(a, _), (b, _)| {
                config_sort_key(a).cmp(&config_sort_key(b)).then(a.cmp(b))
            });
            (app, rows)
        })
        .collect()
}

/// Fixed-width table of Average/Min/Max/Count per application and
/// configuration, with a totals footer.
#[must_use]
pub fn render_table(records: &[RunRecord], x: XAxis, y: YAxis) -> String {
    let grouped = group_records(records, x, y);
    let rule = "=".repeat(70);
    let dashes = "-".repeat(50);

    let mut out = String::new();
    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!("Performance Analysis: {y} vs {x}\n"));
    out.push_str(&format!("{rule}\n"));

    for (app, rows) in &grouped {
        out.push_str(&format!("\n{} RESULTS:\n", app.to_uppercase()));
        out.push_str(&format!("{dashes}\n"));
        out.push_str(&format!(
            "{:<12} {:<12} {:<12} {:<12} {:<6}\n",
            "Config", "Average", "Min", "Max", "Count"
        ));
        out.push_str(&format!("{dashes}\n"));

        for (config, values) in rows {
            if values.is_empty() {
                continue;
            }
            let count = values.len();
            let avg = values.iter().sum::<f64>() / count as f64;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            out.push_str(&format!(
                "{config:<12} {avg:<12.4} {min:<12.4} {max:<12.4} {count:<6}\n"
            ));
        }
    }

    let configurations: usize = grouped.values().map(Vec::len).sum();
    out.push_str("\nSUMMARY:\n");
    out.push_str(&format!("{dashes}\n"));
    out.push_str(&format!("Total results: {}\n", records.len()));
    out.push_str(&format!("Applications: {}\n", grouped.len()));
    out.push_str(&format!("Total configurations: {configurations}\n"));
    out
}

/// Cross-run analysis: IPC spread and cache-size sensitivity per
/// application.
#[must_use]
pub fn render_summary(records: &[RunRecord]) -> String {
    let mut by_app: BTreeMap<String, Vec<&RunRecord>> = BTreeMap::new();
    for record in records {
        by_app.entry(application_of(record)).or_default().push(record);
    }

    let rule = "=".repeat(70);
    let mut out = String::new();
    out.push_str(&format!("\n{rule}\n"));
    out.push_str("ANALYSIS SUMMARY\n");
    out.push_str(&format!("{rule}\n"));

    for (app, runs) in &by_app {
        out.push_str(&format!("\n{}:\n", app.to_uppercase()));

        if runs.len() < 2 {
            out.push_str("  Not enough data points for analysis\n");
            continue;
        }

        let ipcs: Vec<f64> = runs.iter().map(|r| r.stats.ipc().unwrap_or(0.0)).collect();
        let min_ipc = ipcs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ipc = ipcs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max_ipc > 0.0 {
            out.push_str(&format!("  IPC range: {min_ipc:.4} to {max_ipc:.4}\n"));
            if min_ipc > 0.0 {
                let improvement = (max_ipc - min_ipc) / min_ipc * 100.0;
                out.push_str(&format!("  Max improvement: {improvement:.1}%\n"));
            }
        }

        let sizes: BTreeSet<String> = runs
            .iter()
            .map(|r| r.config.cache_size.clone().unwrap_or_default())
            .collect();
        if sizes.len() > 1 {
            let joined = sizes.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
            out.push_str(&format!("  Cache sizes tested: {joined}\n"));

            let mut size_perf: BTreeMap<String, Vec<f64>> = BTreeMap::new();
            for run in runs {
                let ipc = run.stats.ipc().unwrap_or(0.0);
                if ipc > 0.0 {
                    let size = run
                        .config
                        .cache_size
                        .clone()
                        .unwrap_or_else(|| "unknown".to_string());
                    size_perf.entry(size).or_default().push(ipc);
                }
            }

            let mut best: Option<(&str, f64)> = None;
            let mut worst: Option<(&str, f64)> = None;
            for (size, values) in &size_perf {
                let avg = values.iter().sum::<f64>() / values.len() as f64;
                if best.map_or(true, |(_, b)| avg > b) {
                    best = Some((size, avg));
                }
                if worst.map_or(true, |(_, w)| avg < w) {
                    worst = Some((size, avg));
                }
            }
            if let (Some((best_size, best_avg)), Some((worst_size, worst_avg))) = (best, worst) {
                out.push_str(&format!("  Best cache size: {best_size} (IPC: {best_avg:.4})\n"));
                out.push_str(&format!("  Worst cache size: {worst_size} (IPC: {worst_avg:.4})\n"));
            }
        }
    }
    out
}

/// Grouped observations as CSV with an `application,<x>,<y>` header, one
/// row per run.
#[must_use]
pub fn to_csv(records: &[RunRecord], x: XAxis, y: YAxis) -> String {
    let mut out = format!("application,{},{}\n", x.as_str(), y.as_str());
    for (app, rows) in group_records(records, x, y) {
        for (config, values) in rows {
            for value in values {
                out.push_str(&format!("{app},{config},{value}\n"));
            }
        }
    }
    out
}

/// Raw records as pretty-printed JSON.
///
/// # Errors
///
/// Returns a serialization error when a record cannot be encoded.
pub fn to_json(records: &[RunRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
