use clap::ValueEnum;

pub mod catalog;
pub mod harness;
pub mod history;
pub mod schema;
pub mod suites;
pub mod verify;

/// Demo suite(s) to run when recording live results.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum SuiteSelection {
    /// Every suite; the recorded keys match the reference catalog.
    #[default]
    All,
    /// List and map construction/search timings.
    DataStructure,
    /// Parameterized arithmetic timings.
    Math,
    /// Join/split/upper/replace timings.
    String,
    /// Heap-footprint estimates.
    Memory,
    /// Tracked scalar values.
    Tracking,
}

impl SuiteSelection {
    pub fn includes(&self, other: SuiteSelection) -> bool {
        matches!(self, SuiteSelection::All) || *self == other
    }
}
