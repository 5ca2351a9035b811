//! Error type raised while resolving and validating bundle configuration.

use std::path::PathBuf;

/// Errors raised while resolving or validating a bundle configuration.
///
/// Every variant is terminal: the build tool is expected to abort and surface
/// the message to the user verbatim.
#[derive(Debug)]
pub enum ConfigError {
    /// The configured base URL does not point at an existing directory.
    MissingBaseUrl {
        /// Resolved path that was checked on disk.
        path: PathBuf,
    },
    /// A loader configuration file referenced by `configPath` was not found.
    MissingConfigFile {
        /// Resolved path that was checked on disk.
        path: PathBuf,
    },
    /// No injection config path was authored and none could be inferred from
    /// `configPath`.
    MissingInjectionConfig,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBaseUrl { path } => write!(
                f,
                "path '{}' does not exist, provide a valid 'baseURL' in your bundle configuration",
                path.display()
            ),
            Self::MissingConfigFile { path } => write!(
                f,
                "file '{}' was not found, provide a valid loader config file for use during bundling",
                path.display()
            ),
            Self::MissingInjectionConfig => write!(
                f,
                "no bundle injection config file path provided, set the `injectionConfigPath` property in the bundle config"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
