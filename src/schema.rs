use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{"$date": <epoch ms>}` timestamp wrapper used by the dashboard format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStamp {
    #[serde(rename = "$date")]
    pub millis: i64,
}

impl DateStamp {
    pub fn from_secs(secs: i64) -> Self {
        Self {
            millis: secs * 1000,
        }
    }
}

/// Recorded value(s) for one benchmark: `[v]` or `{"<param>": [v], ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Single(Vec<f64>),
    Parameterized(BTreeMap<String, Vec<f64>>),
}

impl ResultValue {
    pub fn values(&self) -> Vec<f64> {
        match self {
            ResultValue::Single(v) => v.clone(),
            ResultValue::Parameterized(p) => p.values().flatten().copied().collect(),
        }
    }
}

/// One result file: all benchmark results for a single commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub commit_hash: String,
    pub date: i64,
    pub env_name: String,
    pub python: String,
    pub requirements: BTreeMap<String, String>,
    pub results: BTreeMap<String, ResultValue>,
    pub started_at: DateStamp,
    pub ended_at: DateStamp,
    pub benchmark_version: BTreeMap<String, String>,
}
