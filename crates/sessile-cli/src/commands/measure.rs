use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sessile_core::io::{load_raster, save_overlay};
use sessile_core::measure::measure_with;
use sessile_core::report::format_log_line;

use super::SettingsArgs;

#[derive(Args)]
pub struct MeasureArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Write a diagnostic overlay PNG
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let (params, heuristics) = args.settings.load()?;
    crate::summary::print_parameter_summary(&params, &heuristics);

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load image {}", args.file.display()))?;
    let result = measure_with(&raster, &params, &heuristics);

    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());
    let angle = result.as_ref().ok().map(|m| m.angle_deg);
    println!("{}", format_log_line(&name, angle));
    if let Err(failure) = &result {
        println!("  reason: {failure}");
    }

    if let Some(ref path) = args.overlay {
        let diagnostics = match &result {
            Ok(m) => &m.diagnostics,
            Err(f) => &f.diagnostics,
        };
        save_overlay(&raster, diagnostics, path)
            .with_context(|| format!("Failed to write overlay {}", path.display()))?;
        println!("Overlay saved to {}", path.display());
    }

    Ok(())
}
