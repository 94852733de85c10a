use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dispatch::DemoSettings;
use crate::error::ConfigError;
use crate::transforms::{builtin_entries, TransformEntry, TransformTable};
use crate::url_builder::{delivery_base, DEFAULT_CLOUD_NAME, DEFAULT_HOST, DEFAULT_PUBLIC_ID};

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// Global configuration loaded from `~/.config/imgurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgurlConfig {
    /// CDN delivery host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Account (cloud) name; second path segment of every URL.
    pub cloud_name: String,
    /// Public id of the image the actions are applied to.
    pub public_id: String,
    /// Action table, in display order. Missing = built-in demo actions.
    #[serde(default = "builtin_entries")]
    pub transforms: Vec<TransformEntry>,
}

impl Default for ImgurlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            cloud_name: DEFAULT_CLOUD_NAME.to_string(),
            public_id: DEFAULT_PUBLIC_ID.to_string(),
            transforms: builtin_entries(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub cloud_name: Option<String>,
    pub public_id: Option<String>,
}

impl ImgurlConfig {
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(cloud_name) = overrides.cloud_name {
            self.cloud_name = cloud_name;
        }
        if let Some(public_id) = overrides.public_id {
            self.public_id = public_id;
        }
        self
    }

    /// Validates the config and builds the settings dispatch runs with.
    pub fn to_settings(&self) -> Result<DemoSettings, ConfigError> {
        for (name, value) in [
            ("host", &self.host),
            ("cloud_name", &self.cloud_name),
            ("public_id", &self.public_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }

        let base = delivery_base(&self.host, &self.cloud_name);
        if let Err(e) = url::Url::parse(&base) {
            return Err(ConfigError::InvalidBase {
                base,
                reason: e.to_string(),
            });
        }

        let table = TransformTable::new(self.transforms.clone())?;
        Ok(DemoSettings::new(base, self.public_id.clone(), table))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ImgurlConfig> {
    if !path.exists() {
        let default_cfg = ImgurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ImgurlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Loads the config file, applies `overrides` and validates the result.
pub fn load_settings(overrides: ConfigOverrides) -> Result<DemoSettings> {
    load_settings_at(&config_path()?, overrides)
}

/// Same as [`load_settings`] for an explicit path. Validation errors name the file.
pub fn load_settings_at(path: &Path, overrides: ConfigOverrides) -> Result<DemoSettings> {
    let cfg = load_or_init_at(path)?.apply(overrides);
    tracing::debug!("loaded config: {:?}", cfg);
    cfg.to_settings()
        .with_context(|| format!("invalid config: {}", path.display()))
}
