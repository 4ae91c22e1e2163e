use clap::{Parser, Subcommand, ValueEnum};
use demo_benchmarks::catalog::BenchmarkCatalog;
use demo_benchmarks::harness::{Profile, RecordConfig};
use demo_benchmarks::history::{self, HistoryConfig};
use demo_benchmarks::suites;
use demo_benchmarks::verify;
use demo_benchmarks::SuiteSelection;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the synthetic commit history (the default when no command is given).
    Generate,

    /// Run the demo suites once and write a result file for a real commit.
    ///
    /// Output goes to <DIR>/recorded, outside the synthetic history.
    Record {
        /// Commit hash to file the results under; falls back to GIT_SHA / GITHUB_SHA.
        #[arg(long, value_name = "HASH")]
        commit: Option<String>,

        #[arg(long, value_enum, default_value_t = ProfileArg::Quick)]
        profile: ProfileArg,

        /// Which demo suite(s) to run.
        #[arg(long, value_enum, default_value_t = SuiteSelection::All)]
        suite: SuiteSelection,
    },

    /// Validate the synthetic history in the results directory against the catalog.
    ///
    /// Only `*.json` files directly in <DIR> are checked; live recordings in
    /// <DIR>/recorded are skipped.
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "create-demo-data")]
#[command(about = "Fabricate historical benchmark results for the dashboard (JSON output)")]
struct Args {
    /// Directory the synthetic history is written to and checked in.
    #[arg(long, value_name = "DIR", default_value = history::DEFAULT_RESULTS_DIR, global = true)]
    results_dir: PathBuf,

    /// Seed for the value generator. If omitted, every run draws fresh values.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

fn commit_from_env() -> Option<String> {
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
}

fn generate(config: &HistoryConfig, seed: u64) -> io::Result<()> {
    let catalog = BenchmarkCatalog::reference();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let written = history::write_history(config, &catalog, &mut rng, |path| {
        println!("Created {}", path.display());
    })?;

    println!("\nCreated {} result files with historical data!", written.len());
    println!("Run 'asv publish' to regenerate the website with graphs.");
    Ok(())
}

fn record(
    config: &HistoryConfig,
    cfg: &RecordConfig,
    commit: Option<String>,
    suite: SuiteSelection,
) -> io::Result<()> {
    let commit_hash = commit.or_else(commit_from_env).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "no commit hash: pass --commit or set GIT_SHA",
        )
    })?;
    let path = suites::record_commit(config, cfg, suite, commit_hash)?;
    println!("Created {}", path.display());
    Ok(())
}

fn check(config: &HistoryConfig) -> io::Result<()> {
    let checked = verify::check_history(
        &config.results_dir,
        &BenchmarkCatalog::reference(),
        config.spacing_secs,
    )?;
    println!(
        "{} result files in {} are consistent",
        checked,
        config.results_dir.display()
    );
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = HistoryConfig {
        results_dir: args.results_dir,
        ..HistoryConfig::reference()
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("seed {seed}");

    match args.cmd.unwrap_or(Command::Generate) {
        Command::Generate => generate(&config, seed),
        Command::Record {
            commit,
            profile,
            suite,
        } => {
            let cfg = RecordConfig {
                profile: profile.into(),
                seed,
            };
            record(&config, &cfg, commit, suite)
        }
        Command::Check => check(&config),
    }
}
