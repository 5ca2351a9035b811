//! Data structures describing authored and resolved bundle configuration.
//!
//! Authored types mirror the configuration file shape: every field is optional
//! and unknown minifier/builder settings are preserved as opaque JSON objects.
//! Resolved types are produced by the [`crate::resolve`] helpers and have every
//! field concrete, ready for hand-off to the bundler.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One or more path patterns, authored either as a single string or as an
/// ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    /// A single path pattern.
    One(String),
    /// An ordered sequence of path patterns.
    Many(Vec<String>),
}

impl PathList {
    /// First entry, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(path) => Some(path),
            Self::Many(paths) => paths.first().map(String::as_str),
        }
    }

    /// Iterate entries in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths.as_slice(),
        }
        .iter()
        .map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(paths) => paths.len(),
        }
    }

    /// True when no entries are present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(paths) if paths.is_empty())
    }
}

impl Default for PathList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<&str> for PathList {
    fn from(path: &str) -> Self {
        Self::One(path.to_string())
    }
}

impl From<String> for PathList {
    fn from(path: String) -> Self {
        Self::One(path)
    }
}

impl From<Vec<String>> for PathList {
    fn from(paths: Vec<String>) -> Self {
        Self::Many(paths)
    }
}

/// Authored global build settings, as read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseConfig {
    /// Root directory the bundler resolves module paths against.
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,
    /// Path(s) to the module loader configuration file(s).
    pub config_path: Option<PathList>,
    /// Loader config file that receives injected bundle references.
    pub injection_config_path: Option<String>,
    /// Bundles to build, keyed by bundle name.
    pub bundles: BTreeMap<String, BundleSpec>,
    /// Bypass caching and overwrite checks when building.
    pub force: Option<bool>,
    /// Opaque settings passed through to the underlying bundler.
    pub builder_cfg: Option<Map<String, Value>>,
}

/// Authored per-bundle settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleSpec {
    /// Path patterns selecting the bundle's source files.
    pub includes: Option<PathList>,
    /// Path patterns excluded from the bundle.
    pub excludes: Option<Vec<String>>,
    /// Nested bundling options.
    pub options: OptionsSpec,
    /// Build this bundle in HTML-import mode.
    #[serde(rename = "htmlimport")]
    pub html_import: Option<bool>,
    /// Override for the output bundle name.
    pub bundle_name: Option<String>,
    /// Per-bundle override of the injection config file.
    pub injection_config_path: Option<String>,
    /// Skip this bundle entirely.
    pub skip: Option<bool>,
}

/// Authored bundling options nested under a bundle entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsSpec {
    /// Whether (or where) to inject bundle references into an entry file.
    pub inject: Option<InjectSpec>,
    /// Minify bundled sources.
    pub minify: Option<bool>,
    /// Revision output file names with a content fingerprint.
    pub rev: Option<bool>,
    /// Options passed through to the HTML minifier.
    #[serde(rename = "htmlminopts")]
    pub html_min_opts: Option<Map<String, Value>>,
    /// Options passed through to the CSS minifier.
    #[serde(rename = "cssminopts")]
    pub css_min_opts: Option<Map<String, Value>>,
}

/// Authored injection setting: a plain flag or an explicit target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InjectSpec {
    /// Injection switched on or off without naming a target file.
    Flag(bool),
    /// Injection into a named entry file.
    Target(InjectTargetSpec),
}

/// Authored injection target with optional entry and destination files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InjectTargetSpec {
    /// HTML file whose references are read during injection.
    pub index_file: Option<String>,
    /// HTML file the injected references are written to.
    pub dest_file: Option<String>,
}

impl InjectTargetSpec {
    /// Resolve into a concrete target, filling missing fields with
    /// `default_file`.
    pub fn into_target(self, default_file: &str) -> Inject {
        Inject::Targeted {
            index_file: self.index_file.unwrap_or_else(|| default_file.to_string()),
            dest_file: self.dest_file.unwrap_or_else(|| default_file.to_string()),
        }
    }
}

/// Global build settings with every top-level default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonConfig {
    /// Root directory the bundler resolves module paths against.
    pub base_url: String,
    /// Path(s) to the module loader configuration file(s).
    pub config_path: PathList,
    /// Loader config file that receives injected bundle references.
    pub injection_config_path: String,
    /// Bundles to build, keyed by bundle name. Still authored values; resolve
    /// each through the per-bundle helpers.
    pub bundles: BTreeMap<String, BundleSpec>,
    /// Bypass caching and overwrite checks when building.
    pub force: bool,
    /// Opaque settings passed through to the underlying bundler.
    pub builder_cfg: Map<String, Value>,
}

/// A fully resolved bundle: global and per-bundle settings with defaults
/// applied, ready for consumption by the bundler.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    /// Name of the output bundle.
    pub bundle_name: String,
    /// Root directory the bundler resolves module paths against.
    pub base_url: String,
    /// Path(s) to the module loader configuration file(s).
    pub config_path: PathList,
    /// Loader config file that receives injected bundle references. HTML-import
    /// bundles leave this unset unless authored per bundle.
    pub injection_config_path: Option<String>,
    /// Bypass caching and overwrite checks when building.
    pub force: bool,
    /// Opaque settings passed through to the underlying bundler.
    pub builder_cfg: Map<String, Value>,
    /// Path patterns selecting the bundle's source files.
    pub includes: PathList,
    /// Path patterns excluded from the bundle.
    pub excludes: Vec<String>,
    /// Skip this bundle entirely.
    pub skip: bool,
    /// Whether the bundle is built in HTML-import mode.
    pub html_import: bool,
    /// Resolved bundling options.
    pub options: BundleOptions,
}

/// Resolved bundling options with every field concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOptions {
    /// Resolved injection behavior.
    pub inject: Inject,
    /// Minify bundled sources.
    pub minify: bool,
    /// Revision output file names with a content fingerprint.
    pub rev: bool,
    /// Authored HTML minifier options; merge against the baseline policy with
    /// [`BundleOptions::resolved_html_min_opts`].
    pub html_min_opts: Map<String, Value>,
    /// Authored CSS minifier options; merge against the baseline policy with
    /// [`BundleOptions::resolved_css_min_opts`].
    pub css_min_opts: Map<String, Value>,
}

impl BundleOptions {
    /// HTML minifier options with the baseline policy filled in.
    pub fn resolved_html_min_opts(&self) -> Map<String, Value> {
        crate::minify::html_min_opts(&self.html_min_opts)
    }

    /// CSS minifier options with the baseline policy filled in.
    pub fn resolved_css_min_opts(&self) -> Map<String, Value> {
        crate::minify::css_min_opts(&self.css_min_opts)
    }
}

/// Resolved injection behavior for a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inject {
    /// No references are injected for this bundle.
    Disabled,
    /// References are injected into the loader config without a target file.
    Enabled,
    /// References are injected into a named HTML entry file.
    Targeted {
        /// HTML file whose references are read during injection.
        index_file: String,
        /// HTML file the injected references are written to.
        dest_file: String,
    },
}

impl Inject {
    /// True unless injection is disabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
