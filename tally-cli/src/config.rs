use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::Currency;
use tally_finance::DEFAULT_TOP_MERCHANTS;

use crate::state::{ensure_parent, tally_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Label printed next to amounts; never used to convert anything
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_top_merchants")]
    pub top_merchants: usize,
}

fn default_top_merchants() -> usize {
    DEFAULT_TOP_MERCHANTS
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            top_merchants: DEFAULT_TOP_MERCHANTS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    ensure_parent(path)?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
