//! File-system checks over a resolved configuration.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::CommonConfig;

/// Check that the paths a build depends on exist on disk.
///
/// Read-only: the base URL must be an existing directory and every loader
/// config path must exist as a file. Error messages carry the resolved
/// absolute path so the user can see exactly what was checked.
pub fn validate_config(config: &CommonConfig) -> Result<(), ConfigError> {
    let base = Path::new(&config.base_url);
    if !base.is_dir() {
        return Err(ConfigError::MissingBaseUrl {
            path: absolute(base),
        });
    }

    for entry in config.config_path.iter() {
        let path = Path::new(entry);
        if !path.exists() {
            return Err(ConfigError::MissingConfigFile {
                path: absolute(path),
            });
        }
    }

    Ok(())
}

/// Best-effort absolute form of a path for diagnostics.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
