//! Defaults for HTML-import bundles.

use crate::models::{
    BundleConfig, BundleOptions, BundleSpec, CommonConfig, Inject, InjectSpec, OptionsSpec,
    PathList,
};

use super::DEFAULT_INDEX_FILE;

const DEFAULT_INCLUDES: &str = "*.html";

/// Merge an HTML-import bundle spec with its mode-specific defaults.
///
/// HTML-import bundles collect `*.html` templates by default and leave
/// injection off unless requested. An authored `inject: true` expands into a
/// target pointing at `index.html` for both entry and destination; an authored
/// target object has missing fields filled with the same default.
pub fn resolve_html_import_bundle_config(
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
        None | Some(InjectSpec::Flag(false)) => Inject::Disabled,
        Some(InjectSpec::Flag(true)) => Inject::Targeted {
            index_file: DEFAULT_INDEX_FILE.to_string(),
            dest_file: DEFAULT_INDEX_FILE.to_string(),
        },
        Some(InjectSpec::Target(target)) => target.into_target(DEFAULT_INDEX_FILE),
    };

    BundleConfig {
        bundle_name: spec.bundle_name.unwrap_or_else(|| bundle_name.to_string()),
        base_url: config.base_url.clone(),
        config_path: config.config_path.clone(),
        injection_config_path: spec.injection_config_path,
        force: config.force,
        builder_cfg: config.builder_cfg.clone(),
        includes: spec
            .includes
            .unwrap_or_else(|| PathList::from(DEFAULT_INCLUDES)),
        excludes: spec.excludes.unwrap_or_default(),
        skip: spec.skip.unwrap_or(false),
        html_import: spec.html_import.unwrap_or(true),
        options: BundleOptions {
            inject,
            minify: minify.unwrap_or(false),
            rev: rev.unwrap_or(false),
            html_min_opts: html_min_opts.unwrap_or_default(),
            css_min_opts: css_min_opts.unwrap_or_default(),
        },
    }
}
