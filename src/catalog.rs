//! Benchmark catalog: the fixed set of benchmark names and their baselines.
//!
//! Names follow the discovery convention of the external runner:
//! `<module>.<Suite>.<prefix>_<name>` where the prefix is `time_`, `mem_`
//! or `track_`.

use std::collections::BTreeMap;

/// Substring that marks a benchmark as a timing measurement.
pub const TIMING_MARKER: &str = "time_";

/// Parameter labels shared by every `MathSuite` benchmark.
pub const MATH_PARAMS: [&str; 3] = ["100", "1000", "5000"];

/// Baseline value of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Baseline {
    Scalar(f64),
    /// One baseline per parameter label.
    Parameterized(BTreeMap<String, f64>),
}

impl Baseline {
    fn parameterized(entries: &[(&str, f64)]) -> Self {
        Baseline::Parameterized(
            entries
                .iter()
                .map(|(label, value)| (label.to_string(), *value))
                .collect(),
        )
    }
}

/// Measurement family, derived from the method-name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchmarkKind {
    Timing,
    Memory,
    Tracking,
}

impl BenchmarkKind {
    /// Classify a dotted benchmark name by its final component.
    pub fn of(name: &str) -> Option<Self> {
        let method = name.rsplit('.').next().unwrap_or(name);
        if method.starts_with("time_") {
            Some(BenchmarkKind::Timing)
        } else if method.starts_with("mem_") {
            Some(BenchmarkKind::Memory)
        } else if method.starts_with("track_") {
            Some(BenchmarkKind::Tracking)
        } else {
            None
        }
    }
}

/// Whether `name` denotes a timing benchmark (and so gets a trend applied).
pub fn is_timing(name: &str) -> bool {
    name.contains(TIMING_MARKER)
}

/// Immutable, name-ordered table of benchmark baselines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkCatalog {
    entries: BTreeMap<String, Baseline>,
}

impl BenchmarkCatalog {
    pub fn new(entries: impl IntoIterator<Item = (String, Baseline)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The demo catalog the dashboard history is built from.
    pub fn reference() -> Self {
        let scalar = |name: &str, value: f64| (name.to_string(), Baseline::Scalar(value));
        let math = |name: &str, values: [f64; 3]| {
            let entries: Vec<(&str, f64)> = MATH_PARAMS.iter().copied().zip(values).collect();
            (name.to_string(), Baseline::parameterized(&entries))
        };

        Self::new([
            scalar("benchmarks.DataStructureSuite.time_dict_creation", 0.000045),
            scalar("benchmarks.DataStructureSuite.time_dict_search", 0.000005),
            scalar("benchmarks.DataStructureSuite.time_list_append", 0.000004),
            scalar("benchmarks.DataStructureSuite.time_list_creation", 0.000010),
            scalar("benchmarks.DataStructureSuite.time_list_extend", 0.000001),
            scalar("benchmarks.DataStructureSuite.time_list_search", 0.000280),
            math(
                "benchmarks.MathSuite.time_pow_operations",
                [0.000008, 0.000075, 0.000375],
            ),
            math(
                "benchmarks.MathSuite.time_sqrt_operations",
                [0.000007, 0.000065, 0.000350],
            ),
            math(
                "benchmarks.MathSuite.time_sum_builtin",
                [0.0000006, 0.000004, 0.000021],
            ),
            math(
                "benchmarks.MathSuite.time_sum_manual",
                [0.000003, 0.000025, 0.000125],
            ),
            scalar("benchmarks.MemorySuite.mem_dict_large", 295000.0),
            scalar("benchmarks.MemorySuite.mem_dict_small", 4700.0),
            scalar("benchmarks.MemorySuite.mem_large_list", 80100.0),
            scalar("benchmarks.MemorySuite.mem_nested_structure", 856.0),
            scalar("benchmarks.MemorySuite.mem_small_list", 856.0),
            scalar("benchmarks.StringSuite.time_string_join", 0.000004),
            scalar("benchmarks.StringSuite.time_string_replace", 0.000004),
            scalar("benchmarks.StringSuite.time_string_split", 0.000010),
            scalar("benchmarks.StringSuite.time_string_upper", 0.000025),
            scalar("benchmarks.TrackingSuite.track_fibonacci_result", 6765.0),
            scalar("benchmarks.TrackingSuite.track_list_length", 25.0),
            scalar("benchmarks.TrackingSuite.track_prime_count", 25.0),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Baseline> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Baseline)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parameter labels of a parameterized entry; `None` for scalar or unknown names.
    pub fn param_labels(&self, name: &str) -> Option<Vec<&str>> {
        match self.entries.get(name)? {
            Baseline::Scalar(_) => None,
            Baseline::Parameterized(params) => Some(params.keys().map(String::as_str).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_shape() {
        let catalog = BenchmarkCatalog::reference();
        assert_eq!(catalog.len(), 22);

        let parameterized: Vec<&str> = catalog
            .iter()
            .filter(|(_, b)| matches!(b, Baseline::Parameterized(_)))
            .map(|(n, _)| n)
            .collect();
        assert_eq!(parameterized.len(), 4);
        for name in parameterized {
            assert!(name.starts_with("benchmarks.MathSuite."));
            assert_eq!(catalog.param_labels(name).unwrap(), MATH_PARAMS.to_vec());
        }

        let count_suite = |suite: &str| catalog.names().filter(|n| n.contains(suite)).count();
        assert_eq!(count_suite(".DataStructureSuite."), 6);
        assert_eq!(count_suite(".MemorySuite."), 5);
        assert_eq!(count_suite(".StringSuite."), 4);
        assert_eq!(count_suite(".TrackingSuite."), 3);
    }

    #[test]
    fn baselines_are_non_negative() {
        for (name, baseline) in BenchmarkCatalog::reference().iter() {
            match baseline {
                Baseline::Scalar(v) => assert!(*v >= 0.0, "{name}"),
                Baseline::Parameterized(p) => assert!(p.values().all(|v| *v >= 0.0), "{name}"),
            }
        }
    }

    #[test]
    fn kind_follows_method_prefix() {
        assert_eq!(
            BenchmarkKind::of("benchmarks.MathSuite.time_sum_manual"),
            Some(BenchmarkKind::Timing)
        );
        assert_eq!(
            BenchmarkKind::of("benchmarks.MemorySuite.mem_small_list"),
            Some(BenchmarkKind::Memory)
        );
        assert_eq!(
            BenchmarkKind::of("benchmarks.TrackingSuite.track_prime_count"),
            Some(BenchmarkKind::Tracking)
        );
        assert_eq!(BenchmarkKind::of("benchmarks.Suite.setup"), None);
    }

    #[test]
    fn timing_marker() {
        assert!(is_timing("benchmarks.StringSuite.time_string_join"));
        assert!(!is_timing("benchmarks.MemorySuite.mem_dict_large"));
        assert!(!is_timing("benchmarks.TrackingSuite.track_list_length"));
    }

    #[test]
    fn scalar_entries_have_no_params() {
        let catalog = BenchmarkCatalog::reference();
        assert!(catalog
            .param_labels("benchmarks.MemorySuite.mem_dict_small")
            .is_none());
        assert!(catalog.param_labels("benchmarks.Missing.time_x").is_none());
    }
}
