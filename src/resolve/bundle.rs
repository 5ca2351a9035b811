//! Per-bundle defaults for script and style bundles.

use crate::models::{
    BundleConfig, BundleOptions, BundleSpec, CommonConfig, Inject, InjectSpec, OptionsSpec,
};

use super::DEFAULT_INDEX_FILE;

/// Merge a per-bundle spec with defaults derived from the resolved global
/// configuration.
///
/// Authored values win at every depth. Unauthored fields fall back to the
/// global settings (`baseURL`, `configPath`, `injectionConfigPath`, `force`,
/// `builderCfg`) or to the bundle-local defaults: empty include/exclude
/// lists, injection on, minification and revisioning off.
pub fn resolve_bundle_config(
    spec: BundleSpec,
    bundle_name: &str,
    config: &CommonConfig,
) -> BundleConfig {
    let OptionsSpec {
        inject,
        minify,
        rev,
        html_min_opts,
        css_min_opts,
    } = spec.options;

    let inject = match inject {
        None | Some(InjectSpec::Flag(true)) => Inject::Enabled,
        Some(InjectSpec::Flag(false)) => Inject::Disabled,
        Some(InjectSpec::Target(target)) => target.into_target(DEFAULT_INDEX_FILE),
    };

    BundleConfig {
        bundle_name: spec.bundle_name.unwrap_or_else(|| bundle_name.to_string()),
        base_url: config.base_url.clone(),
        config_path: config.config_path.clone(),
        injection_config_path: spec
            .injection_config_path
            .or_else(|| Some(config.injection_config_path.clone())),
        force: config.force,
        builder_cfg: config.builder_cfg.clone(),
        includes: spec.includes.unwrap_or_default(),
        excludes: spec.excludes.unwrap_or_default(),
        skip: spec.skip.unwrap_or(false),
        html_import: spec.html_import.unwrap_or(false),
        options: BundleOptions {
            inject,
            minify: minify.unwrap_or(false),
            rev: rev.unwrap_or(false),
            html_min_opts: html_min_opts.unwrap_or_default(),
            css_min_opts: css_min_opts.unwrap_or_default(),
        },
    }
}
