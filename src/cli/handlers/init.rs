use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    AppConfig::default().save(&config_path)?;

    println!("{} {}", "Wrote".green(), config_path.display());
    Ok(())
}
