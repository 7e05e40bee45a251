use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sessile_core::params::ParameterSet;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the parameter file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default parameters as a parameter file.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let text = toml::to_string(&ParameterSet::default())?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write parameters to {}", path.display()))?;
        println!("Default parameters saved to {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}
