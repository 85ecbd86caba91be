//! gem5 `stats.txt` parsing and derived metrics
//!
//! A stats file is line-oriented: `name value [# comment]`. Comment and
//! blank lines are skipped, and only values that parse as `f64` are kept,
//! since every downstream metric is numeric.
//!
//! Experiment parameters are recovered from result-directory names of the
//! shape produced by the sweep runner, `<kernel>_<l1d-size>_assoc<N>`, so a
//! directory tree of runs is self-describing.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LocalidadError, Result};

/// Tick period assumed when `sim_seconds` is absent (2 GHz clock).
pub const SECONDS_PER_TICK: f64 = 0.5e-9;

/// Kernel binaries the config scanner recognizes in path components.
pub const KNOWN_APPLICATIONS: &[&str] = &[
    "matrix_mult",
    "mmm_naive",
    "image_blur",
    "stream_bench",
    "branch_sum",
    "branch_random",
    "tlb_stride",
    "scatter_update",
];

/// Cache level selector for miss-rate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLevel {
    L1d,
    L1i,
    L2,
}

impl CacheLevel {
    /// The `(misses, accesses)` stat keys for this level.
    #[must_use]
    pub const fn miss_keys(self) -> (&'static str, &'static str) {
        match self {
            CacheLevel::L1d => (
                "system.cpu.dcache.overall_misses::total",
                "system.cpu.dcache.overall_accesses::total",
            ),
            CacheLevel::L1i => (
                "system.cpu.icache.overall_misses::total",
                "system.cpu.icache.overall_accesses::total",
            ),
            CacheLevel::L2 => (
                "system.l2cache.overall_misses::total",
                "system.l2cache.overall_accesses::total",
            ),
        }
    }
}

/// Numeric stats from one `stats.txt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsFile {
    values: HashMap<String, f64>,
}

impl StatsFile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Instructions per tick, `sim_insts / sim_ticks`.
    ///
    /// `None` when either counter is missing or no ticks elapsed.
    #[must_use]
    pub fn ipc(&self) -> Option<f64> {
        let insts = self.get("sim_insts")?;
        let ticks = self.get("sim_ticks")?;
        if ticks > 0.0 {
            Some(insts / ticks)
        } else {
            None
        }
    }

    /// Miss rate for one cache level, `misses / accesses`.
    ///
    /// `None` when the counters are missing or the cache was never accessed.
    #[must_use]
    pub fn miss_rate(&self, level: CacheLevel) -> Option<f64> {
        let (misses_key, accesses_key) = level.miss_keys();
        let misses = self.get(misses_key)?;
        let accesses = self.get(accesses_key)?;
        if accesses > 0.0 {
            Some(misses / accesses)
        } else {
            None
        }
    }

    /// Simulated execution time in seconds.
    ///
    /// Prefers `sim_seconds`; falls back to `sim_ticks` at the assumed
    /// 2 GHz clock.
    #[must_use]
    pub fn execution_time(&self) -> Option<f64> {
        if let Some(seconds) = self.get("sim_seconds") {
            return Some(seconds);
        }
        self.get("sim_ticks").map(|ticks| ticks * SECONDS_PER_TICK)
    }
}

/// Experiment parameters recovered from a result-directory path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Kernel binary name, when a path component names one.
    pub application: Option<String>,
    /// L1D size token as written in the directory name, e.g. `8kB`.
    pub cache_size: Option<String>,
    /// L1D associativity.
    pub associativity: Option<u32>,
}

impl RunConfig {
    /// Recover parameters from a result directory.
    ///
    /// The size and associativity tokens are read from the final path
    /// component; the application may sit in any component, so layouts
    /// like `results/image_blur/8kB_assoc2` also resolve.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let dirname = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut config = RunConfig {
            application: None,
            cache_size: find_cache_size(&dirname),
            associativity: find_associativity(&dirname),
        };

        for component in path.components() {
            let part = component.as_os_str().to_string_lossy();
            if let Some(app) = known_application(&part) {
                config.application = Some(app.to_string());
                break;
            }
        }

        config
    }
}

/// First `<digits>kB` token in `name`, returned as written (`8kB`, `32KB`).
#[must_use]
pub fn find_cache_size(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let suffix_ok = i + 1 < bytes.len()
                && (bytes[i] == b'k' || bytes[i] == b'K')
                && (bytes[i + 1] == b'b' || bytes[i + 1] == b'B');
            if suffix_ok {
                return Some(name[start..i + 2].to_string());
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Number following the first `assoc` token in `name`.
#[must_use]
pub fn find_associativity(name: &str) -> Option<u32> {
    for (pos, _) in name.match_indices("assoc") {
        let rest = &name[pos + "assoc".len()..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            if let Ok(assoc) = digits.parse() {
                return Some(assoc);
            }
        }
    }
    None
}

/// The longest known kernel name contained in `component`, if any.
#[must_use]
pub fn known_application(component: &str) -> Option<&'static str> {
    KNOWN_APPLICATIONS
        .iter()
        .filter(|app| component.contains(*app))
        .max_by_key(|app| app.len())
        .copied()
}

/// One parsed simulation run: where it was found, what it was, what it
/// measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub path: PathBuf,
    pub config: RunConfig,
    pub stats: StatsFile,
}

/// Parse one `stats.txt`.
///
/// # Errors
///
/// Returns an I/O error when the file cannot be read.
pub fn parse_stats(path: &Path) -> Result<StatsFile> {
    let contents = fs::read_to_string(path)?;
    let mut stats = StatsFile::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if let Ok(number) = value.parse::<f64>() {
            stats.insert(key, number);
        }
    }

    Ok(stats)
}

/// Walk `results_dir` recursively and parse every directory holding a
/// `stats.txt`. Unparseable files are logged and skipped; records come back
/// sorted by path so reports are stable.
///
/// # Errors
///
/// Returns an I/O error when a directory cannot be listed.
pub fn collect_runs(results_dir: &Path) -> Result<Vec<RunRecord>> {
    let mut records = Vec::new();
    walk_results(results_dir, &mut records)?;
    records.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(records)
}

fn walk_results(dir: &Path, records: &mut Vec<RunRecord>) -> Result<()> {
    let stats_path = dir.join("stats.txt");
    if stats_path.is_file() {
        match parse_stats(&stats_path) {
            Ok(stats) if !stats.is_empty() => records.push(RunRecord {
                path: dir.to_path_buf(),
                config: RunConfig::from_path(dir),
                stats,
            }),
            Ok(_) => log::warn!("no numeric stats in {}", stats_path.display()),
            Err(err) => log::warn!("skipping {}: {err}", stats_path.display()),
        }
    }

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    subdirs.sort();
    for subdir in subdirs {
        walk_results(&subdir, records)?;
    }
    Ok(())
}

/// Union of stat keys across the `stats*.txt` files directly under `dir`,
/// sorted.
///
/// # Errors
///
/// Returns [`LocalidadError::NoResults`] when no stats file is present, or
/// an I/O error when the directory cannot be listed.
pub fn list_keys(dir: &Path) -> Result<Vec<String>> {
    let mut keys = BTreeSet::new();
    let mut found = false;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with("stats") || !name.ends_with(".txt") {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        found = true;
        match parse_stats(&path) {
            Ok(stats) => keys.extend(stats.keys().map(str::to_owned)),
            Err(err) => log::warn!("skipping {}: {err}", path.display()),
        }
    }

    if !found {
        return Err(LocalidadError::NoResults {
            dir: dir.display().to_string(),
        });
    }
    Ok(keys.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_stats(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("stats.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_skips_comments_and_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stats(
            dir.path(),
            "# ---------- Begin Simulation Statistics ----------\n\
             sim_insts 1000000 # Number of instructions\n\
             sim_ticks 2000000000\n\
             \n\
             system.workload.release 99.33.1.0 # OS release\n\
             malformed\n",
        );

        let stats = parse_stats(&path).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("sim_insts"), Some(1_000_000.0));
        assert_eq!(stats.get("sim_ticks"), Some(2_000_000_000.0));
        assert_eq!(stats.get("system.workload.release"), None);
    }

    #[test]
    fn test_ipc_and_execution_time() {
        let mut stats = StatsFile::new();
        stats.insert("sim_insts", 1_000_000.0);
        stats.insert("sim_ticks", 4_000_000.0);
        assert_eq!(stats.ipc(), Some(0.25));
        // No sim_seconds: fall back to ticks at 2 GHz.
        assert_eq!(stats.execution_time(), Some(4_000_000.0 * SECONDS_PER_TICK));

        stats.insert("sim_seconds", 0.125);
        assert_eq!(stats.execution_time(), Some(0.125));
    }

    #[test]
    fn test_ipc_missing_or_zero_ticks() {
        let mut stats = StatsFile::new();
        assert_eq!(stats.ipc(), None);
        stats.insert("sim_insts", 10.0);
        stats.insert("sim_ticks", 0.0);
        assert_eq!(stats.ipc(), None);
    }

    #[test]
    fn test_miss_rate_per_level() {
        let mut stats = StatsFile::new();
        stats.insert("system.cpu.dcache.overall_misses::total", 25.0);
        stats.insert("system.cpu.dcache.overall_accesses::total", 100.0);
        stats.insert("system.l2cache.overall_misses::total", 5.0);
        stats.insert("system.l2cache.overall_accesses::total", 0.0);

        assert_eq!(stats.miss_rate(CacheLevel::L1d), Some(0.25));
        // Zero accesses cannot produce a rate.
        assert_eq!(stats.miss_rate(CacheLevel::L2), None);
        assert_eq!(stats.miss_rate(CacheLevel::L1i), None);
    }

    #[test]
    fn test_config_from_sweep_dirname() {
        let config = RunConfig::from_path(Path::new("results/matrix_mult_8kB_assoc2"));
        assert_eq!(config.application.as_deref(), Some("matrix_mult"));
        assert_eq!(config.cache_size.as_deref(), Some("8kB"));
        assert_eq!(config.associativity, Some(2));
    }

    #[test]
    fn test_config_application_in_parent_component() {
        let config = RunConfig::from_path(Path::new("results/image_blur/32KB_assoc4"));
        assert_eq!(config.application.as_deref(), Some("image_blur"));
        assert_eq!(config.cache_size.as_deref(), Some("32KB"));
        assert_eq!(config.associativity, Some(4));
    }

    #[test]
    fn test_config_absent_tokens() {
        let config = RunConfig::from_path(Path::new("results/run_001"));
        assert_eq!(config.application, None);
        assert_eq!(config.cache_size, None);
        assert_eq!(config.associativity, None);
    }

    #[test]
    fn test_find_cache_size_variants() {
        assert_eq!(find_cache_size("tlb_stride_64kb_assoc8").as_deref(), Some("64kb"));
        assert_eq!(find_cache_size("128KB").as_deref(), Some("128KB"));
        // A digit run not followed by the size suffix is not a size token.
        assert_eq!(find_cache_size("assoc4"), None);
        assert_eq!(find_cache_size("run12k3kB").as_deref(), Some("3kB"));
    }

    #[test]
    fn test_find_associativity_requires_digits() {
        assert_eq!(find_associativity("stream_bench_8kB_assoc16"), Some(16));
        assert_eq!(find_associativity("associative"), None);
        assert_eq!(find_associativity("assocx_assoc4"), Some(4));
    }

    #[test]
    fn test_collect_runs_walks_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("stream_bench_8kB_assoc2");
        let b = dir.path().join("stream_bench_32kB_assoc2");
        let noise = dir.path().join("notes");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::create_dir_all(&noise).unwrap();
        write_stats(&a, "sim_insts 100\nsim_ticks 400\n");
        write_stats(&b, "sim_insts 100\nsim_ticks 200\n");

        let records = collect_runs(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        // Sorted by path: 32kB before 8kB lexicographically.
        assert_eq!(records[0].config.cache_size.as_deref(), Some("32kB"));
        assert_eq!(records[0].stats.ipc(), Some(0.5));
        assert_eq!(records[1].config.cache_size.as_deref(), Some("8kB"));
    }

    #[test]
    fn test_collect_runs_skips_empty_stats() {
        let dir = tempfile::tempdir().unwrap();
        let run = dir.path().join("image_blur_8kB_assoc2");
        fs::create_dir_all(&run).unwrap();
        write_stats(&run, "# only comments here\n");

        let records = collect_runs(dir.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_list_keys_unions_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stats_a.txt"), "zeta 1\nsim_insts 5\n").unwrap();
        fs::write(dir.path().join("stats_b.txt"), "alpha 2\nsim_insts 7\n").unwrap();
        fs::write(dir.path().join("config.ini"), "ignored 1\n").unwrap();

        let keys = list_keys(dir.path()).unwrap();
        assert_eq!(keys, vec!["alpha", "sim_insts", "zeta"]);
    }

    #[test]
    fn test_list_keys_empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_keys(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no simulation results"));
    }

    #[test]
    fn test_known_application_prefers_longest() {
        assert_eq!(known_application("branch_random_8kB"), Some("branch_random"));
        assert_eq!(known_application("results"), None);
    }
}
