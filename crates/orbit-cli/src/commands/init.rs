use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use orbit_core::OrbitConfig;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config.json with defaults
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.json");
    if config_path.exists() && !args.force {
        println!("Orbit is already initialized in {}.", data_dir.display());
        println!("Use --force to reset config.json to defaults.");
        return Ok(());
    }

    let config = OrbitConfig {
        data_dir: data_dir.to_path_buf(),
        ..OrbitConfig::default()
    };
    config
        .save()
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Orbit initialized in {}.", data_dir.display());
    println!();
    println!("Next steps:");
    println!("  orbit add \"Name\" --type friend     Add someone to track");
    println!("  orbit log <id> \"What happened\"      Log an interaction");
    println!("  orbit list                         See everyone with a health score");
    Ok(())
}
