use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ghost_tests::run_scenario_file;
use tracing::{error, info};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario vector files to evaluate.
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut failures = 0usize;
    for path in &args.scenarios {
        match run_scenario_file(path) {
            Ok(outcome) if outcome.passed() => {
                info!(scenario = %path.display(), head = %outcome.head, "pass");
            }
            Ok(outcome) => {
                failures += 1;
                error!(
                    scenario = %path.display(),
                    head = %outcome.head,
                    expected = %outcome.expected,
                    "head mismatch",
                );
            }
            Err(err) => {
                failures += 1;
                error!(scenario = %path.display(), "rejected: {err:#}");
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
