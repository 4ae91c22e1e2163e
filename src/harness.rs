//! Minimal timing loop used by `record` to turn the demo workloads into
//! per-call timings.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How long `record` spends on each workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Quick,
    Full,
}

impl Profile {
    /// `(warmup, measured)` call counts.
    pub fn iteration_counts(self) -> (u64, u64) {
        match self {
            Profile::Quick => (10, 100),
            Profile::Full => (100, 2_000),
        }
    }
}

/// Settings for one live `record` run.
#[derive(Clone, Debug)]
pub struct RecordConfig {
    pub profile: Profile,
    /// Seeds workload setup (random search keys, math inputs).
    pub seed: u64,
}

impl RecordConfig {
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Time `f` with this profile's iteration counts.
    pub fn measure<T>(&self, f: impl FnMut() -> T) -> Timing {
        let (warmup, iters) = self.profile.iteration_counts();
        time_calls(warmup, iters, f)
    }
}

/// Result of one timed workload.
#[derive(Clone, Debug)]
pub struct Timing {
    pub calls: u64,
    pub elapsed: Duration,
    /// Mean wall time per call, the unit `time_*` results are stored in.
    pub secs_per_call: f64,
}

/// Call `f` `warmup` times untimed, then `iters` times under the clock.
pub fn time_calls<T>(warmup: u64, iters: u64, mut f: impl FnMut() -> T) -> Timing {
    (0..warmup).for_each(|_| {
        black_box(f());
    });

    let start = Instant::now();
    (0..iters).for_each(|_| {
        black_box(f());
    });
    let elapsed = start.elapsed();

    Timing {
        calls: iters,
        elapsed,
        secs_per_call: elapsed.as_secs_f64() / iters.max(1) as f64,
    }
}
