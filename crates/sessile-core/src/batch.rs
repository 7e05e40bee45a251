use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::io::load_raster;
use crate::measure::{measure_with, AngleResult};
use crate::params::{Heuristics, ParameterSet};
use crate::report::format_log_line;

/// Progress callback for batch runs. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn begin(&self, _total: usize) {}

    /// `done` images have finished, in any order.
    fn advance(&self, _done: usize) {}

    fn finish(&self) {}
}

pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// One processed file. `outcome` is `Err` only when the file could not be
/// read or decoded; measurement failures live inside the `AngleResult`.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Result<AngleResult>,
}

impl BatchEntry {
    pub fn angle(&self) -> Option<f64> {
        match &self.outcome {
            Ok(Ok(m)) => Some(m.angle_deg),
            _ => None,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn log_line(&self) -> String {
        format_log_line(&self.file_name(), self.angle())
    }
}

/// Load and measure one file.
pub fn measure_file(path: &Path, params: &ParameterSet, heuristics: &Heuristics) -> BatchEntry {
    let outcome = load_raster(path).map(|raster| measure_with(&raster, params, heuristics));
    match &outcome {
        Ok(Ok(m)) => info!(file = %path.display(), angle_deg = m.angle_deg, "Measured"),
        Ok(Err(failure)) => warn!(file = %path.display(), error = %failure, "No contact angle"),
        Err(e) => warn!(file = %path.display(), error = %e, "Could not load image"),
    }
    BatchEntry {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Measure every file, optionally in parallel on the rayon pool.
/// Entries come back in input order either way.
pub fn measure_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    params: &ParameterSet,
    heuristics: &Heuristics,
    parallel: bool,
    reporter: &dyn ProgressReporter,
) -> Vec<BatchEntry> {
    debug!(%params, files = paths.len(), parallel, "Batch started");
    reporter.begin(paths.len());
    let done = AtomicUsize::new(0);
    let run = |path: &P| {
        let entry = measure_file(path.as_ref(), params, heuristics);
        reporter.advance(done.fetch_add(1, Ordering::Relaxed) + 1);
        entry
    };

    let entries = if parallel {
        paths.par_iter().map(run).collect()
    } else {
        paths.iter().map(run).collect()
    };
    reporter.finish();
    entries
}
