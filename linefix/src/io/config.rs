//! Editor configuration stored in `linefix.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::rules::RemovalRules;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "linefix.toml";

/// File the historical fix-up was written for, relative to the working directory.
pub const DEFAULT_TARGET: &str = "frontend/src/app/router.tsx";

/// Editor configuration (TOML).
///
/// Missing fields default to the historical fix-up. Unknown keys are
/// rejected so a misspelled rule cannot silently fall back to a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LinefixConfig {
    /// File to edit.
    pub target: PathBuf,

    pub rules: RemovalRules,
}

impl Default for LinefixConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            rules: RemovalRules::default(),
        }
    }
}

impl LinefixConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(anyhow!("target must be a non-empty path"));
        }
        let errors = self.rules.validate();
        if !errors.is_empty() {
            return Err(anyhow!("invalid rules:\n- {}", errors.join("\n- ")));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LinefixConfig::default()`.
pub fn load_config(path: &Path) -> Result<LinefixConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = LinefixConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    load_config_file(path)
}

/// Load config from a TOML file that must exist.
pub fn load_config_file(path: &Path) -> Result<LinefixConfig> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinefixConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Serialize config to pretty TOML with a trailing newline.
pub fn render_config(cfg: &LinefixConfig) -> Result<String> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}
