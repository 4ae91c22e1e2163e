//! Demo workloads that mirror the dashboard's benchmark catalog.
//!
//! Each suite exposes its workloads as plain functions (used by the criterion
//! benches) plus a `record` function that runs every workload once through the
//! timing harness and reports results under the catalog's dotted names.

use crate::harness::RecordConfig;
use crate::history::{self, HistoryConfig, FILE_STEM_LEN};
use crate::schema::{DateStamp, ResultRecord, ResultValue};
use crate::SuiteSelection;
use log::info;
use rand::Rng;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

pub mod data_structure;
pub mod math;
pub mod memory;
pub mod string;
pub mod tracking;

/// Root module name every catalog entry lives under.
pub const MODULE: &str = "benchmarks";

pub fn qualified(suite: &str, method: &str) -> String {
    format!("{MODULE}.{suite}.{method}")
}

/// Mean seconds per call of `f`, as a single-element result.
pub(crate) fn timed<T>(cfg: &RecordConfig, f: impl FnMut() -> T) -> ResultValue {
    ResultValue::Single(vec![cfg.measure(f).secs_per_call])
}

/// Run the selected suites once and collect results under their catalog names.
///
/// With `SuiteSelection::All` the key set equals `BenchmarkCatalog::reference()`.
pub fn record_results<R: Rng + ?Sized>(
    cfg: &RecordConfig,
    selection: SuiteSelection,
    rng: &mut R,
) -> BTreeMap<String, ResultValue> {
    let mut results = BTreeMap::new();
    if selection.includes(SuiteSelection::DataStructure) {
        info!("running {}", data_structure::SUITE);
        results.extend(data_structure::record(cfg, rng));
    }
    if selection.includes(SuiteSelection::Math) {
        info!("running {}", math::SUITE);
        results.extend(math::record(cfg, rng));
    }
    if selection.includes(SuiteSelection::String) {
        info!("running {}", string::SUITE);
        results.extend(string::record(cfg));
    }
    if selection.includes(SuiteSelection::Memory) {
        results.extend(memory::record());
    }
    if selection.includes(SuiteSelection::Tracking) {
        results.extend(tracking::record());
    }
    results
}

/// Run the selected suites live and file the result for `commit_hash` under
/// `config.recorded_dir()`, away from the synthetic history.
pub fn record_commit(
    config: &HistoryConfig,
    cfg: &RecordConfig,
    selection: SuiteSelection,
    commit_hash: String,
) -> io::Result<PathBuf> {
    let stem = commit_hash
        .get(..FILE_STEM_LEN)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("commit hash must have at least {FILE_STEM_LEN} characters"),
            )
        })?
        .to_string();

    info!("recording {commit_hash} ({:?} profile, seed {})", cfg.profile, cfg.seed);
    let started = history::unix_now_millis();
    let results = record_results(cfg, selection, &mut cfg.rng());
    let ended = history::unix_now_millis();

    let record = ResultRecord {
        commit_hash,
        date: started / 1000,
        env_name: config.env_name.clone(),
        python: config.python.clone(),
        requirements: BTreeMap::new(),
        results,
        started_at: DateStamp { millis: started },
        ended_at: DateStamp { millis: ended },
        benchmark_version: BTreeMap::new(),
    };

    let dir = config.recorded_dir();
    fs::create_dir_all(&dir)?;
    history::write_record(&dir, &stem, &record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Baseline, BenchmarkCatalog};
    use crate::harness::Profile;
    use crate::verify::check_history;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::tempdir;

    #[test]
    fn recorded_results_cover_reference_catalog() {
        let cfg = RecordConfig {
            profile: Profile::Quick,
            seed: 1,
        };
        let results = record_results(&cfg, SuiteSelection::All, &mut cfg.rng());
        let catalog = BenchmarkCatalog::reference();

        assert!(results.keys().map(String::as_str).eq(catalog.names()));
        for (name, baseline) in catalog.iter() {
            match (baseline, &results[name]) {
                (Baseline::Scalar(_), ResultValue::Single(v)) => assert_eq!(v.len(), 1),
                (Baseline::Parameterized(params), ResultValue::Parameterized(got)) => {
                    assert!(got.keys().eq(params.keys()), "{name}");
                }
                other => panic!("{name}: shape mismatch {other:?}"),
            }
            assert!(results[name]
                .values()
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0));
        }
    }

    #[test]
    fn selection_limits_suites() {
        let cfg = RecordConfig {
            profile: Profile::Quick,
            seed: 1,
        };
        let results = record_results(&cfg, SuiteSelection::Tracking, &mut cfg.rng());
        assert_eq!(results.len(), 3);
        assert!(results.keys().all(|k| k.starts_with("benchmarks.TrackingSuite.")));
    }

    #[test]
    fn recordings_do_not_disturb_history_checks() {
        let dir = tempdir().unwrap();
        let config = HistoryConfig {
            results_dir: dir.path().to_path_buf(),
            ..HistoryConfig::reference()
        };
        let catalog = BenchmarkCatalog::reference();
        history::write_history(&config, &catalog, &mut ChaCha8Rng::seed_from_u64(2), |_| {})
            .unwrap();

        let cfg = RecordConfig {
            profile: Profile::Quick,
            seed: 2,
        };
        let path = record_commit(
            &config,
            &cfg,
            SuiteSelection::Tracking,
            "0123456789abcdef".to_string(),
        )
        .unwrap();
        assert_eq!(path, config.recorded_dir().join("01234567.json"));

        let record: ResultRecord =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(record.commit_hash, "0123456789abcdef");
        assert_eq!(record.results.len(), 3);
        assert!(record.ended_at.millis >= record.started_at.millis);

        assert_eq!(check_history(dir.path(), &catalog, config.spacing_secs).unwrap(), 10);
    }

    #[test]
    fn record_rejects_short_hash() {
        let dir = tempdir().unwrap();
        let config = HistoryConfig {
            results_dir: dir.path().to_path_buf(),
            ..HistoryConfig::reference()
        };
        let cfg = RecordConfig {
            profile: Profile::Quick,
            seed: 0,
        };
        let err = record_commit(&config, &cfg, SuiteSelection::Memory, "abc".to_string())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!config.recorded_dir().exists());
    }
}
