//! CLI entry point: expand the glob, sweep the matches, decide the exit code.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use tracing::error;

use jsonvalidate::discover::discover_files;
use jsonvalidate::sweep::sweep;
use jsonvalidate::{exit_codes, logging, profile};

#[derive(Parser)]
#[command(
    name = "jsonvalidate",
    version,
    about = "Check that every file matching a glob parses as JSON"
)]
struct Cli {
    /// Glob pattern selecting the files to validate, e.g. 'dumps/*.json'.
    pattern: String,

    /// Write a CPU flamegraph of the run to this file.
    #[arg(long, value_name = "FILE")]
    cpu_profile: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let started = Instant::now();
    let mut code = exit_codes::OK;

    let profile = match &cli.cpu_profile {
        Some(path) => match profile::start(path) {
            Ok(profile) => Some(profile),
            Err(err) => {
                error!("{err:#}");
                code = exit_codes::FAILED;
                None
            }
        },
        None => None,
    };

    // A malformed pattern is terminal but still reaches the summary line
    // with an empty task set.
    let files = match discover_files(&cli.pattern) {
        Ok(files) => files,
        Err(err) => {
            error!("{err:#}");
            code = exit_codes::FAILED;
            Vec::new()
        }
    };

    let summary = sweep(files);
    if !summary.all_passed() {
        code = exit_codes::FAILED;
    }
    println!(
        "summary: passed={} failed={} elapsed_secs={:.3} wait_secs={:.3}",
        summary.passed,
        summary.failed,
        started.elapsed().as_secs_f64(),
        summary.waited.as_secs_f64()
    );

    // The profile covers everything up to and including the exit decision.
    if let Some(profile) = profile {
        if let Err(err) = profile.finish() {
            error!("{err:#}");
            code = exit_codes::FAILED;
        }
    }

    code
}
