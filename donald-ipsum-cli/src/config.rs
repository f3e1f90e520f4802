use anyhow::{Context, Result};
use donald_ipsum::ApiConfig;
use log::debug;
use std::{fs, path::Path};

/// Reads an `ApiConfig` from a TOML file. Missing keys keep their defaults.
pub fn load(path: &Path) -> Result<ApiConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {} failed", path.display()))?;

    let config: ApiConfig = toml::from_str(&text)
        .with_context(|| format!("parse config file {} failed", path.display()))?;

    debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

/// `--base-url` wins over the config file, which wins over the default.
pub fn resolve(base_url: Option<String>, config_path: Option<&Path>) -> Result<ApiConfig> {
    let config = match config_path {
        Some(path) => load(path)?,
        None => ApiConfig::default(),
    };

    Ok(match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    })
}
