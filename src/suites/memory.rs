//! Heap-footprint workloads.
//!
//! Each `mem_*` workload builds a structure and reports its estimated size in
//! bytes: the container header plus its allocated capacity. Map estimates count
//! one control byte per slot on top of the key/value pair.

use super::qualified;
use crate::schema::ResultValue;
use std::collections::HashMap;
use std::mem::size_of;

pub const SUITE: &str = "MemorySuite";

const SMALL: usize = 100;
const LARGE: usize = 10_000;

pub fn vec_footprint<T>(v: &Vec<T>) -> usize {
    size_of::<Vec<T>>() + v.capacity() * size_of::<T>()
}

pub fn map_footprint<K, V>(m: &HashMap<K, V>) -> usize {
    size_of::<HashMap<K, V>>() + m.capacity() * (size_of::<(K, V)>() + 1)
}

fn int_map(n: usize) -> HashMap<i64, i64> {
    (0..n as i64).map(|i| (i, i)).collect()
}

pub fn mem_small_list() -> usize {
    vec_footprint(&vec![0i64; SMALL])
}

pub fn mem_large_list() -> usize {
    vec_footprint(&vec![0i64; LARGE])
}

pub fn mem_dict_small() -> usize {
    map_footprint(&int_map(SMALL))
}

pub fn mem_dict_large() -> usize {
    map_footprint(&int_map(LARGE))
}

/// 100 rows of 10 integers.
pub fn mem_nested_structure() -> usize {
    let nested: Vec<Vec<i64>> = (0..100).map(|_| (0..10).collect()).collect();
    vec_footprint(&nested) + nested.iter().map(|row| row.capacity() * size_of::<i64>()).sum::<usize>()
}

pub fn record() -> Vec<(String, ResultValue)> {
    let workloads: [(&str, fn() -> usize); 5] = [
        ("mem_small_list", mem_small_list),
        ("mem_large_list", mem_large_list),
        ("mem_dict_small", mem_dict_small),
        ("mem_dict_large", mem_dict_large),
        ("mem_nested_structure", mem_nested_structure),
    ];
    workloads
        .iter()
        .map(|(method, workload)| {
            (
                qualified(SUITE, method),
                ResultValue::Single(vec![workload() as f64]),
            )
        })
        .collect()
}
