use crate::config::{defaults::CONFIG_FILE_NAME, write_default_rules};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    let path = init_config_in(&dir, force)?;
    println!("Created {} rule file", path.display());
    Ok(())
}

/// Write the default rule file into `dir`, refusing to replace an existing
/// one unless `force` is set.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Rule file already exists. Use --force to overwrite.");
    }

    write_default_rules(dir)
}
