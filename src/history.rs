//! Synthetic benchmark history.
//!
//! Fabricates a run of fake commits spaced evenly over a time window and writes
//! one dashboard result file per commit. Values are the catalog baselines scaled
//! by a uniform +/-20% variation and, for timing benchmarks, a linear
//! improvement trend across commits.

use crate::catalog::{is_timing, Baseline, BenchmarkCatalog};
use crate::schema::{DateStamp, ResultRecord, ResultValue};
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Total length of a synthesized commit hash.
pub const HASH_LEN: usize = 40;
const HASH_PREFIX: &str = "abcd";
const HASH_FILLER: char = 'f';

/// Characters of the hash used for the result filename.
pub const FILE_STEM_LEN: usize = 8;

/// Largest history whose zero-padded index still fits the file stem.
pub const MAX_COMMITS: u32 = 10_000;

/// Wall time attributed to each synthetic run.
pub const RUN_DURATION_SECS: i64 = 30;

/// Relative trend applied per commit index to timing benchmarks.
pub const TREND_STEP: f64 = 0.02;

/// Half-width of the uniform variation band around 1.0.
pub const VARIATION_SPREAD: f64 = 0.4;

pub const DEFAULT_RESULTS_DIR: &str = ".asv/results/fanes-newton";
/// Subdirectory of the results dir that live `record` output goes to.
pub const RECORDED_SUBDIR: &str = "recorded";
pub const DEFAULT_ENV_NAME: &str = "virtualenv-py3.10";
pub const DEFAULT_PYTHON: &str = "3.10";

const VERSIONED_BENCHMARK: &str = "benchmarks.DataStructureSuite.time_dict_creation";
const BENCHMARK_VERSION_HASH: &str =
    "181aba53f726dd45f7f7369852c2454cbdc6b4ad9b40df4403755a559d3bf1a3";

#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Number of commits to synthesize.
    pub count: u32,
    /// Gap between consecutive commits.
    pub spacing_secs: i64,
    /// "Now"; the earliest commit lands `count * spacing_secs` before it.
    pub now_secs: i64,
    pub env_name: String,
    pub python: String,
    pub results_dir: PathBuf,
}

impl HistoryConfig {
    /// Ten commits, three days apart, ending at the current time.
    pub fn reference() -> Self {
        Self {
            count: 10,
            spacing_secs: 3 * SECS_PER_DAY,
            now_secs: unix_now_secs(),
            env_name: DEFAULT_ENV_NAME.to_string(),
            python: DEFAULT_PYTHON.to_string(),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }

    /// Where live recordings land; kept out of the synthetic history so `check` ignores them.
    pub fn recorded_dir(&self) -> PathBuf {
        self.results_dir.join(RECORDED_SUBDIR)
    }
}

pub fn unix_now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

pub fn unix_now_secs() -> i64 {
    unix_now_millis() / 1000
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub timestamp: i64,
    pub index: u32,
}

impl Commit {
    pub fn file_stem(&self) -> &str {
        &self.hash[..FILE_STEM_LEN.min(self.hash.len())]
    }
}

pub fn commit_hash(index: u32) -> String {
    let mut hash = format!("{HASH_PREFIX}{index:04}");
    while hash.len() < HASH_LEN {
        hash.push(HASH_FILLER);
    }
    hash
}

pub fn synthesize_commits(config: &HistoryConfig) -> Vec<Commit> {
    let base = config.now_secs - i64::from(config.count) * config.spacing_secs;
    (0..config.count)
        .map(|index| Commit {
            hash: commit_hash(index),
            timestamp: base + i64::from(index) * config.spacing_secs,
            index,
        })
        .collect()
}

/// Uniform multiplier in [0.8, 1.2).
pub fn variation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 + (rng.gen::<f64>() - 0.5) * VARIATION_SPREAD
}

/// Timing benchmarks get faster by `TREND_STEP` per commit; everything else is flat.
pub fn trend_factor(name: &str, index: u32) -> f64 {
    if is_timing(name) {
        1.0 - f64::from(index) * TREND_STEP
    } else {
        1.0
    }
}

pub fn sample_results<R: Rng + ?Sized>(
    catalog: &BenchmarkCatalog,
    commit: &Commit,
    rng: &mut R,
) -> BTreeMap<String, ResultValue> {
    catalog
        .iter()
        .map(|(name, baseline)| {
            let trend = trend_factor(name, commit.index);
            let value = match baseline {
                Baseline::Scalar(base) => ResultValue::Single(vec![base * variation(rng) * trend]),
                Baseline::Parameterized(params) => ResultValue::Parameterized(
                    params
                        .iter()
                        .map(|(label, base)| (label.clone(), vec![base * variation(rng) * trend]))
                        .collect(),
                ),
            };
            (name.to_string(), value)
        })
        .collect()
}

pub fn build_record<R: Rng + ?Sized>(
    config: &HistoryConfig,
    catalog: &BenchmarkCatalog,
    commit: &Commit,
    rng: &mut R,
) -> ResultRecord {
    ResultRecord {
        commit_hash: commit.hash.clone(),
        date: commit.timestamp,
        env_name: config.env_name.clone(),
        python: config.python.clone(),
        requirements: BTreeMap::new(),
        results: sample_results(catalog, commit, rng),
        started_at: DateStamp::from_secs(commit.timestamp),
        ended_at: DateStamp::from_secs(commit.timestamp + RUN_DURATION_SECS),
        benchmark_version: BTreeMap::from([(
            VERSIONED_BENCHMARK.to_string(),
            BENCHMARK_VERSION_HASH.to_string(),
        )]),
    }
}

/// Pretty-print `record` to `<dir>/<stem>.json`, replacing any existing file.
pub fn write_record(dir: &Path, stem: &str, record: &ResultRecord) -> io::Result<PathBuf> {
    let path = dir.join(format!("{stem}.json"));
    let json = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Generate the full history into `config.results_dir`.
///
/// `on_written` is called once per file, in commit order, right after it lands
/// on disk. The first I/O failure aborts the run.
pub fn write_history<R: Rng + ?Sized>(
    config: &HistoryConfig,
    catalog: &BenchmarkCatalog,
    rng: &mut R,
    mut on_written: impl FnMut(&Path),
) -> io::Result<Vec<PathBuf>> {
    if config.count > MAX_COMMITS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} commits requested; file names are only unique up to {MAX_COMMITS}",
                config.count
            ),
        ));
    }
    fs::create_dir_all(&config.results_dir)?;

    let commits = synthesize_commits(config);
    info!(
        "writing {} result files ({} benchmarks each) to {}",
        commits.len(),
        catalog.len(),
        config.results_dir.display()
    );

    let mut written = Vec::with_capacity(commits.len());
    for commit in &commits {
        let record = build_record(config, catalog, commit, rng);
        let path = write_record(&config.results_dir, commit.file_stem(), &record)?;
        debug!("commit {} (index {}) -> {}", commit.hash, commit.index, path.display());
        on_written(&path);
        written.push(path);
    }

    Ok(written)
}
