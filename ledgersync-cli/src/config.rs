use anyhow::{Context, Result};
use ledgersync_batch::{DEFAULT_START_ROW, MalformedAmountPolicy, PipelineOptions};
use ledgersync_core::CategoryRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_ledgersync_home, ledgersync_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetSection,
    pub pipeline: PipelineSection,
    pub categories: CategoryRules,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SheetSection {
    /// Spreadsheet key from the sheet URL
    pub spreadsheet_id: Option<String>,
    /// Google service-account JSON key
    pub key_file: Option<PathBuf>,
    /// First row searched for free space (row 11 on the ledger template)
    pub start_row: u32,
}

impl Default for SheetSection {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            key_file: None,
            start_row: DEFAULT_START_ROW,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineSection {
    pub malformed_amount: MalformedAmountPolicy,
    /// Drop the first CSV record as a header
    pub has_headers: bool,
}

impl Config {
    /// Options for one run. `skip_malformed` from the command line wins over
    /// the configured policy.
    pub fn pipeline_options(&self, skip_malformed: bool) -> PipelineOptions {
        PipelineOptions {
            rules: self.categories.clone(),
            malformed_amount: if skip_malformed {
                MalformedAmountPolicy::Skip
            } else {
                self.pipeline.malformed_amount
            },
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(ledgersync_home()?.join("config.toml"))
}

/// Load `path` (or the default location). A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn render_config(cfg: &Config) -> Result<String> {
    toml::to_string_pretty(cfg).context("serialize config")
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = render_config(cfg)?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_ledgersync_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
