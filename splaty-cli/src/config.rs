use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use splaty_core::LOAN_REPAYMENT_CATEGORY;
use splaty_report::{HtmlOptions, ReportEmitter, ReportFormat, DEFAULT_FILE_PREFIX};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_splaty_home, splaty_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Account history XML export
    pub path: PathBuf,
    /// Transaction type label marking loan repayments
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub out_dir: PathBuf,
    pub format: ReportFormat,
    pub file_prefix: String,
    pub currency: String,
    pub locale: String,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("operations.xml"),
            category: LOAN_REPAYMENT_CATEGORY.to_string(),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        let html = HtmlOptions::default();
        Self {
            out_dir: PathBuf::from("."),
            format: ReportFormat::Html,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            currency: html.currency,
            locale: html.locale,
        }
    }
}

impl ReportSection {
    pub fn emitter(&self) -> ReportEmitter {
        ReportEmitter {
            format: self.format,
            file_prefix: self.file_prefix.clone(),
            html: HtmlOptions {
                currency: self.currency.clone(),
                locale: self.locale.clone(),
            },
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(splaty_home()?.join("config.toml"))
}

/// Load `explicit` (must exist) or the default path (defaults when absent).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(p) => {
            if !p.exists() {
                bail!("config not found: {}", p.display());
            }
            read_config(p)
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            read_config(&p)
        }
    }
}

pub fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write the default config unless one exists (or `force`). Returns the path.
pub fn init_config(explicit: Option<&Path>, force: bool) -> Result<PathBuf> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => ensure_splaty_home()?.join("config.toml"),
    };
    if p.exists() && !force {
        println!("Config already exists: {}", p.display());
        return Ok(p);
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(p)
}
