use std::path::Path;

use anyhow::{bail, Result};

use pagedots_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            config_path.display()
        );
    }

    AppConfig::default().save_to(config_path)?;
    tracing::info!("Wrote default config to {}", config_path.display());
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
