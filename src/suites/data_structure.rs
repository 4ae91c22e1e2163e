use super::{qualified, timed};
use crate::harness::RecordConfig;
use crate::schema::ResultValue;
use rand::Rng;
use std::collections::HashMap;

pub const SUITE: &str = "DataStructureSuite";

pub const SIZE: usize = 1200;
pub const SEARCH_KEYS: usize = 100;
const APPEND_COUNT: usize = 80;
const EXTEND_COUNT: usize = 100;

/// List and map construction/lookup over a fixed-size integer range.
#[derive(Debug, Clone)]
pub struct DataStructureSuite {
    pub data: Vec<usize>,
    pub dict_data: HashMap<usize, usize>,
    pub search_keys: Vec<usize>,
}

impl DataStructureSuite {
    pub fn setup<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            data: (0..SIZE).collect(),
            dict_data: (0..SIZE).map(|i| (i, i)).collect(),
            search_keys: (0..SEARCH_KEYS).map(|_| rng.gen_range(0..SIZE)).collect(),
        }
    }

    pub fn list_creation(&self) -> Vec<usize> {
        (0..SIZE).collect()
    }

    pub fn dict_creation(&self) -> HashMap<usize, usize> {
        (0..SIZE).map(|i| (i, i)).collect()
    }

    /// Linear membership test for every search key; returns the hit count.
    pub fn list_search(&self) -> usize {
        self.search_keys
            .iter()
            .filter(|key| self.data.contains(*key))
            .count()
    }

    pub fn dict_search(&self) -> usize {
        self.search_keys
            .iter()
            .filter(|key| self.dict_data.contains_key(*key))
            .count()
    }

    pub fn list_append(&self) -> Vec<usize> {
        let mut result = Vec::new();
        for i in 0..APPEND_COUNT {
            result.push(i);
        }
        result
    }

    pub fn list_extend(&self) -> Vec<usize> {
        let mut result = Vec::new();
        result.extend(0..EXTEND_COUNT);
        result
    }
}

pub fn record<R: Rng + ?Sized>(cfg: &RecordConfig, rng: &mut R) -> Vec<(String, ResultValue)> {
    let suite = DataStructureSuite::setup(rng);
    vec![
        (
            qualified(SUITE, "time_list_creation"),
            timed(cfg, || suite.list_creation()),
        ),
        (
            qualified(SUITE, "time_dict_creation"),
            timed(cfg, || suite.dict_creation()),
        ),
        (
            qualified(SUITE, "time_list_search"),
            timed(cfg, || suite.list_search()),
        ),
        (
            qualified(SUITE, "time_dict_search"),
            timed(cfg, || suite.dict_search()),
        ),
        (
            qualified(SUITE, "time_list_append"),
            timed(cfg, || suite.list_append()),
        ),
        (
            qualified(SUITE, "time_list_extend"),
            timed(cfg, || suite.list_extend()),
        ),
    ]
}
