//! Consistency checks for a directory of result files.

use crate::catalog::{Baseline, BenchmarkCatalog, BenchmarkKind};
use crate::history::{FILE_STEM_LEN, HASH_LEN, RUN_DURATION_SECS};
use crate::schema::{ResultRecord, ResultValue};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{path}: invalid result file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no result files found in {0}")]
    Empty(PathBuf),

    #[error("{path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl From<VerifyError> for io::Error {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

/// Parse every `*.json` directly inside `dir`, ordered by commit date.
pub fn load_results(dir: &Path) -> Result<Vec<(PathBuf, ResultRecord)>, VerifyError> {
    let mut records = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| VerifyError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let text = fs::read_to_string(path)?;
        let record: ResultRecord =
            serde_json::from_str(&text).map_err(|source| VerifyError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded {} ({} results)", path.display(), record.results.len());
        records.push((path.to_path_buf(), record));
    }

    records.sort_by_key(|(_, r)| r.date);
    Ok(records)
}

fn invalid(path: &Path, reason: impl Into<String>) -> VerifyError {
    VerifyError::Invalid {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Check a single record against the catalog and the file it was read from.
pub fn check_record(
    path: &Path,
    record: &ResultRecord,
    catalog: &BenchmarkCatalog,
) -> Result<(), VerifyError> {
    if record.commit_hash.len() != HASH_LEN {
        return Err(invalid(
            path,
            format!("commit hash has {} chars, expected {HASH_LEN}", record.commit_hash.len()),
        ));
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    if record.commit_hash.get(..FILE_STEM_LEN) != Some(stem) {
        return Err(invalid(path, "file name does not match commit hash prefix"));
    }

    let duration = record.ended_at.millis - record.started_at.millis;
    if duration != RUN_DURATION_SECS * 1000 {
        return Err(invalid(path, format!("run lasted {duration} ms")));
    }

    if !record.results.keys().map(String::as_str).eq(catalog.names()) {
        return Err(invalid(path, "results do not match the benchmark catalog"));
    }

    for (name, baseline) in catalog.iter() {
        if BenchmarkKind::of(name).is_none() {
            return Err(invalid(
                path,
                format!("{name}: not a time_/mem_/track_ benchmark"),
            ));
        }
        let value = &record.results[name];
        match (baseline, value) {
            (Baseline::Scalar(_), ResultValue::Single(v)) if v.len() == 1 => {}
            (Baseline::Parameterized(_), ResultValue::Parameterized(got))
                if catalog
                    .param_labels(name)
                    .is_some_and(|labels| got.keys().map(String::as_str).eq(labels))
                    && got.values().all(|v| v.len() == 1) => {}
            _ => return Err(invalid(path, format!("{name}: unexpected result shape"))),
        }
        if !value.values().iter().all(|v| v.is_finite() && *v >= 0.0) {
            return Err(invalid(path, format!("{name}: negative or non-finite value")));
        }
    }

    Ok(())
}

/// Validate a generated history; returns the number of files checked.
pub fn check_history(
    dir: &Path,
    catalog: &BenchmarkCatalog,
    spacing_secs: i64,
) -> Result<usize, VerifyError> {
    let records = load_results(dir)?;
    if records.is_empty() {
        return Err(VerifyError::Empty(dir.to_path_buf()));
    }

    for (path, record) in &records {
        check_record(path, record, catalog)?;
    }

    for pair in records.windows(2) {
        let (_, prev) = &pair[0];
        let (path, next) = &pair[1];
        if next.date - prev.date != spacing_secs {
            return Err(invalid(
                path,
                format!("expected {spacing_secs}s after previous commit, got {}s", next.date - prev.date),
            ));
        }
    }

    Ok(records.len())
}
