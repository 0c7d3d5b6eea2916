//! Best-effort CPU profiling around a validation run.
//!
//! Started before dispatch and finalized after the exit decision. A
//! profiling failure is reported in the exit status but never stops
//! validation from running.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pprof::ProfilerGuard;

/// A running CPU profile, finalized with [`CpuProfile::finish`].
pub struct CpuProfile {
    guard: ProfilerGuard<'static>,
    file: File,
    path: PathBuf,
}

impl std::fmt::Debug for CpuProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuProfile")
            .field("file", &self.file)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Create the output file and start sampling.
///
/// The file is created eagerly so a creation failure surfaces before any
/// validation work starts.
pub fn start(path: &Path) -> Result<CpuProfile> {
    let file =
        File::create(path).with_context(|| format!("create CPU profile {}", path.display()))?;
    let guard = pprof::ProfilerGuardBuilder::default()
        .frequency(99)
        .blocklist(&["libc", "libgcc", "pthread", "vdso"])
        .build()
        .context("start CPU profiler")?;
    Ok(CpuProfile {
        guard,
        file,
        path: path.to_path_buf(),
    })
}

impl CpuProfile {
    /// Stop sampling and write a flamegraph SVG into the file created at
    /// [`start`].
    pub fn finish(self) -> Result<()> {
        let report = self
            .guard
            .report()
            .build()
            .context("build CPU profile report")?;
        report
            .flamegraph(&self.file)
            .with_context(|| format!("write CPU profile {}", self.path.display()))?;
        Ok(())
    }
}
