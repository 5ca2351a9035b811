//! Top-level defaults for the global build configuration.

use crate::error::ConfigError;
use crate::models::{BaseConfig, CommonConfig, PathList};

const DEFAULT_BASE_URL: &str = ".";
const DEFAULT_CONFIG_PATH: &str = "./config.js";

/// Apply top-level defaults to the global configuration.
///
/// Defaulting is shallow: a key the user authored is kept wholesale and only
/// entirely absent keys are filled in. The injection config path, when not
/// authored, is inferred from the first resolved loader config path; an
/// explicitly empty `configPath` sequence leaves nothing to infer from and is
/// an error.
pub fn resolve_common_config(config: BaseConfig) -> Result<CommonConfig, ConfigError> {
    let config_path = config
        .config_path
        .unwrap_or_else(|| PathList::from(DEFAULT_CONFIG_PATH));

    let injection_config_path = match config.injection_config_path {
        Some(path) => path,
        None => config_path
            .first()
            .ok_or(ConfigError::MissingInjectionConfig)?
            .to_string(),
    };

    Ok(CommonConfig {
        base_url: config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        config_path,
        injection_config_path,
        bundles: config.bundles,
        force: config.force.unwrap_or(false),
        builder_cfg: config.builder_cfg.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_resolves_to_documented_defaults() {
        let common = resolve_common_config(BaseConfig::default()).unwrap();

        assert_eq!(common.base_url, ".");
        assert_eq!(common.config_path, PathList::from("./config.js"));
        assert_eq!(common.injection_config_path, "./config.js");
        assert!(common.bundles.is_empty());
        assert!(!common.force);
        assert!(common.builder_cfg.is_empty());
    }

    #[test]
    fn authored_values_are_kept_wholesale() {
        let config: BaseConfig = serde_json::from_str(
            r#"{
                "baseURL": "dist",
                "configPath": ["jspm.config.js", "override.config.js"],
                "force": true,
                "builderCfg": {"separateCSS": true}
            }"#,
        )
        .unwrap();

        let common = resolve_common_config(config).unwrap();
        assert_eq!(common.base_url, "dist");
        assert_eq!(common.injection_config_path, "jspm.config.js");
        assert!(common.force);
        assert_eq!(
            common.builder_cfg["separateCSS"],
            serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn authored_injection_path_wins_over_inference() {
        let config = BaseConfig {
            config_path: Some(PathList::from("config.js")),
            injection_config_path: Some("inject.config.js".to_string()),
            ..BaseConfig::default()
        };

        let common = resolve_common_config(config).unwrap();
        assert_eq!(common.injection_config_path, "inject.config.js");
    }

    #[test]
    fn empty_config_path_sequence_cannot_infer_injection_config() {
        let config = BaseConfig {
            config_path: Some(PathList::Many(Vec::new())),
            ..BaseConfig::default()
        };

        let err = resolve_common_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInjectionConfig));
        assert!(err.to_string().contains("injectionConfigPath"));
    }
}
