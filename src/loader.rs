//! Reading bundle configuration files from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::BaseConfig;

/// Default configuration file name searched for in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "bundle.config.json";

/// Load a [`BaseConfig`] from a JSON or YAML file.
///
/// `.yaml` and `.yml` extensions are parsed as YAML; everything else is
/// treated as JSON.
pub fn load_base_config(path: &Path) -> Result<BaseConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read bundle config at {}", path.display()))?;

    let config = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse bundle config YAML at {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse bundle config JSON at {}", path.display()))?
    };
    Ok(config)
}

/// Load the default config file from `dir`.
///
/// A missing file is not an error: the empty configuration is returned and
/// [`crate::resolve::resolve_common_config`] fills in every default later.
/// Unreadable or malformed files still fail.
pub fn discover_base_config(dir: &Path) -> Result<BaseConfig> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
        return Ok(BaseConfig::default());
    }
    load_base_config(&candidate)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
