use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$SPLATY_HOME`, or `~/.splaty`.
pub fn splaty_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SPLATY_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".splaty"))
}

pub fn ensure_splaty_home() -> Result<PathBuf> {
    let dir = splaty_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
