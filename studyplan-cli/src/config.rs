use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;
use crate::state::ensure_studyplan_home;

pub const TOKEN_ENV: &str = "STUDYPLAN_TOKEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerSection,
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSection {
    /// IANA zone used for due dates without an offset and for display.
    pub timezone: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Bearer token, preferring `$STUDYPLAN_TOKEN` over the stored one.
    pub fn token(&self) -> Option<String> {
        resolve_token(std::env::var(TOKEN_ENV).ok(), self.api.token.clone())
    }
}

fn resolve_token(from_env: Option<String>, stored: Option<String>) -> Option<String> {
    from_env
        .into_iter()
        .chain(stored)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_studyplan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Effective config as TOML, token masked.
pub fn show_config(cfg: &Config) -> Result<String> {
    let mut shown = cfg.clone();
    shown.api.token = cfg.token().map(|_| "********".to_string());
    toml::to_string_pretty(&shown).context("serialize config")
}
