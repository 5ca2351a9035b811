#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod merge;
pub mod minify;
pub mod models;
pub mod naming;
pub mod resolve;
pub mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, discover_base_config, load_base_config};
pub use models::{
    BaseConfig, BundleConfig, BundleOptions, BundleSpec, CommonConfig, Inject, InjectSpec,
    InjectTargetSpec, OptionsSpec, PathList,
};
pub use naming::{fingerprint, out_file_name};
pub use resolve::{
    resolve_bundle_config, resolve_common_config, resolve_html_import_bundle_config,
};
pub use validate::validate_config;
