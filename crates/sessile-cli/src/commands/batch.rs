use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sessile_core::batch::{measure_files, BatchEntry, ProgressReporter};
use sessile_core::io::{list_images, load_raster, save_overlay};
use sessile_core::report::{format_log, BatchSummary};
use tracing::warn;

use super::SettingsArgs;

#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing the images
    pub dir: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Results log file [default: <DIR>/results.log]
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Comma-separated image extensions to accept
    #[arg(long, value_delimiter = ',', default_value = "jpg,jpeg")]
    pub extensions: Vec<String>,

    /// Measure images in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (0 = all cores)
    #[arg(short, long, default_value = "0")]
    pub jobs: usize,

    /// Write one diagnostic overlay PNG per image into this directory
    #[arg(long)]
    pub overlay_dir: Option<PathBuf>,
}

struct BarReporter(ProgressBar);

impl ProgressReporter for BarReporter {
    fn begin(&self, total: usize) {
        self.0.set_length(total as u64);
    }

    fn advance(&self, done: usize) {
        self.0.set_position(done as u64);
    }

    fn finish(&self) {
        self.0.finish_with_message("Done");
    }
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let (params, heuristics) = args.settings.load()?;
    crate::summary::print_parameter_summary(&params, &heuristics);

    let files = list_images(&args.dir, &args.extensions)
        .with_context(|| format!("Failed to list {}", args.dir.display()))?;
    if files.is_empty() {
        warn!(dir = %args.dir.display(), "No matching images");
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Measuring");
    let reporter = BarReporter(pb);

    let entries = if args.parallel && args.jobs > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build()
            .context("Failed to build thread pool")?;
        pool.install(|| measure_files(&files, &params, &heuristics, true, &reporter))
    } else {
        measure_files(&files, &params, &heuristics, args.parallel, &reporter)
    };

    let log_path = args.log.clone().unwrap_or_else(|| args.dir.join("results.log"));
    std::fs::write(&log_path, format_log(&entries))
        .with_context(|| format!("Failed to write log {}", log_path.display()))?;

    if let Some(ref dir) = args.overlay_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for entry in &entries {
            write_overlay(entry, dir)?;
        }
    }

    for entry in &entries {
        println!("{}", entry.log_line());
    }
    let summary = BatchSummary::of(&entries);
    println!(
        "\n{} image(s), {} measured, {} without angle",
        summary.total, summary.measured, summary.failed
    );
    println!("Results written to {}", log_path.display());

    Ok(())
}

fn write_overlay(entry: &BatchEntry, dir: &std::path::Path) -> Result<()> {
    let diagnostics = match &entry.outcome {
        Ok(Ok(m)) => &m.diagnostics,
        Ok(Err(f)) => &f.diagnostics,
        Err(_) => return Ok(()),
    };
    let raster = load_raster(&entry.path)
        .with_context(|| format!("Failed to reload {}", entry.path.display()))?;
    let stem = entry
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.file_name());
    let path = dir.join(format!("{stem}_overlay.png"));
    save_overlay(&raster, diagnostics, &path)
        .with_context(|| format!("Failed to write overlay {}", path.display()))?;
    Ok(())
}
