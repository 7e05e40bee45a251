pub mod batch;
pub mod config;
pub mod measure;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sessile_core::params::{Heuristics, ParameterSet};
use tracing::debug;

/// Parameter file picked up from the working directory when none is named.
const DEFAULT_PARAMS_FILE: &str = "parameters.txt";

/// Options shared by `measure` and `batch`.
#[derive(Args)]
pub struct SettingsArgs {
    /// Parameter file (NAME = value lines). Defaults to ./parameters.txt if present
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Heuristics override file (TOML)
    #[arg(long)]
    pub heuristics: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn load(&self) -> Result<(ParameterSet, Heuristics)> {
        Ok((load_params(self.params.as_deref())?, load_heuristics(self.heuristics.as_deref())?))
    }
}

fn load_params(explicit: Option<&Path>) -> Result<ParameterSet> {
    if let Some(path) = explicit {
        return ParameterSet::from_file(path)
            .with_context(|| format!("Failed to read parameter file {}", path.display()));
    }
    let fallback = Path::new(DEFAULT_PARAMS_FILE);
    if fallback.is_file() {
        return ParameterSet::from_file(fallback)
            .with_context(|| format!("Failed to read parameter file {}", fallback.display()));
    }
    debug!("No parameter file, using defaults");
    Ok(ParameterSet::default())
}

fn load_heuristics(path: Option<&Path>) -> Result<Heuristics> {
    let Some(path) = path else {
        return Ok(Heuristics::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read heuristics {}", path.display()))?;
    toml::from_str(&contents).context("Invalid heuristics file")
}
