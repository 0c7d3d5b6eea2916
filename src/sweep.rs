//! Fan-out/fan-in dispatch: one validator thread per file, tallied results.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::validate::validate_file;

/// Aggregate result of one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of files dispatched.
    pub total: usize,
    /// Files that parsed as JSON.
    pub passed: usize,
    /// Files that failed to open, read, or parse.
    pub failed: usize,
    /// Time spent blocked on the join barrier waiting for validators.
    pub waited: Duration,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Validate every file concurrently and tally the outcomes.
///
/// One thread per file; each thread sends exactly one outcome into a channel
/// whose capacity equals the task count, so a send never blocks. The join
/// loop is the barrier: the drain below it observes every outcome. Per-file
/// errors are logged in the worker and never propagate; a panicked worker is
/// tallied as one failed outcome so outcomes always balance dispatches.
pub fn sweep(files: Vec<PathBuf>) -> Summary {
    let total = files.len();
    let (sender, receiver) = mpsc::sync_channel::<bool>(total);

    let mut handles = Vec::with_capacity(total);
    for path in files {
        let sender = sender.clone();
        handles.push(thread::spawn(move || {
            let failed = match validate_file(&path) {
                Ok(()) => false,
                Err(err) => {
                    error!("{err:#}");
                    true
                }
            };
            let _ = sender.send(failed);
        }));
    }
    // All live senders are now inside workers; the drain below terminates
    // once the last one drops.
    drop(sender);

    let wait_started = Instant::now();
    let mut panicked = 0usize;
    for handle in handles {
        if handle.join().is_err() {
            error!("validator thread panicked");
            panicked += 1;
        }
    }
    let waited = wait_started.elapsed();

    let mut failed = panicked;
    for outcome in receiver {
        if outcome {
            failed += 1;
        }
    }
    debug!(total, failed, "sweep complete");

    Summary {
        total,
        passed: total - failed,
        failed,
        waited,
    }
}
