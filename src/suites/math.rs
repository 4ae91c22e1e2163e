use super::qualified;
use crate::harness::RecordConfig;
use crate::schema::ResultValue;
use rand::Rng;
use std::collections::BTreeMap;

pub const SUITE: &str = "MathSuite";

/// Input sizes; their decimal strings are the result param labels.
pub const PARAMS: [usize; 3] = [100, 1000, 5000];

/// Arithmetic over a vector of uniform random numbers in [0, 1).
#[derive(Debug, Clone)]
pub struct MathSuite {
    pub numbers: Vec<f64>,
}

impl MathSuite {
    pub fn setup<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            numbers: (0..size).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    pub fn sum_builtin(&self) -> f64 {
        self.numbers.iter().sum()
    }

    pub fn sum_manual(&self) -> f64 {
        let mut total = 0.0;
        for num in &self.numbers {
            total += num;
        }
        total
    }

    pub fn sqrt_operations(&self) -> Vec<f64> {
        self.numbers.iter().map(|x| x.sqrt()).collect()
    }

    pub fn pow_operations(&self) -> Vec<f64> {
        self.numbers.iter().map(|x| x.powi(2)).collect()
    }
}

type Workload = fn(&MathSuite) -> f64;

pub fn record<R: Rng + ?Sized>(cfg: &RecordConfig, rng: &mut R) -> Vec<(String, ResultValue)> {
    let suites: Vec<(String, MathSuite)> = PARAMS
        .iter()
        .map(|&size| (size.to_string(), MathSuite::setup(size, rng)))
        .collect();

    // Vec-returning workloads are reduced to their length so one fn type fits all.
    let workloads: [(&str, Workload); 4] = [
        ("time_sum_builtin", |s: &MathSuite| s.sum_builtin()),
        ("time_sum_manual", |s: &MathSuite| s.sum_manual()),
        ("time_sqrt_operations", |s: &MathSuite| s.sqrt_operations().len() as f64),
        ("time_pow_operations", |s: &MathSuite| s.pow_operations().len() as f64),
    ];

    workloads
        .iter()
        .map(|(method, workload)| {
            let per_param: BTreeMap<String, Vec<f64>> = suites
                .iter()
                .map(|(label, suite)| {
                    let timing = cfg.measure(|| workload(suite));
                    (label.clone(), vec![timing.secs_per_call])
                })
                .collect();
            (
                qualified(SUITE, method),
                ResultValue::Parameterized(per_param),
            )
        })
        .collect()
}
