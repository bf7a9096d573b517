use crate::locale::Translations;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional configuration read from `~/.config/weblaunch/config.toml`.
/// The file is never written; every key has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// URL used when `--url` is not given (None = built-in default).
    pub default_url: Option<String>,
    /// Upper bound in seconds on how long process exit waits for the
    /// detached browser launch to finish.
    pub exit_grace_secs: u64,
    /// Per-locale string translations, e.g. `[translations.fr]`.
    pub translations: Translations,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            default_url: None,
            exit_grace_secs: 10,
            translations: Translations::new(),
        }
    }
}

impl LauncherConfig {
    pub fn exit_grace(&self) -> Duration {
        Duration::from_secs(self.exit_grace_secs)
    }
}

/// Path of an existing config file, if any. Does not create directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weblaunch")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration, or defaults when no file exists.
pub fn load() -> Result<LauncherConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(LauncherConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<LauncherConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LauncherConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
