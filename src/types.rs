//! Data shared by the locator and the resolver.
//!
//! The caller describes where compiler options come from with [`ResolveProps`].
//! Its `ts_config` field is a [`TsConfig`]: either a path to a config file or an
//! inline options object. When it is absent, the resolver falls back to
//! discovery from the first entry point (see [`ConfigSource`]).
//!
//! In JSON form the props look like:
//!
//! ```json
//! { "tsConfig": "./tsconfig.json", "options": { "entries": ["index.ts"] },
//!   "homeDir": "/proj/src", "production": false }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{CompilerOptions, Diagnostic};

/// Untyped compiler options as found in a config file or supplied inline.
pub type RawOptions = Map<String, Value>;

/// The caller-supplied `tsConfig` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TsConfig {
    /// Path to a config file.
    Path(PathBuf),
    /// Inline compiler options.
    Options(RawOptions),
}

/// Input surface for [`Tsfig::resolve`](crate::Tsfig::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveProps {
    pub ts_config: Option<TsConfig>,
    pub options: ResolveOptions,
    pub home_dir: Option<PathBuf>,
    pub production: bool,
}

/// The `options` block of [`ResolveProps`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Entry-point path fragments, relative to `home_dir`.
    pub entries: Vec<String>,
}

impl ResolveOptions {
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where the raw options for a resolution come from.
///
/// Selected once from [`ResolveProps`]; the first matching variant wins in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    ExplicitPath(PathBuf),
    ExplicitOptions(RawOptions),
    /// Search upward from `start_file`'s directory, bounded by `root`.
    Discovered { root: PathBuf, start_file: PathBuf },
    None,
}

impl ConfigSource {
    pub fn select(props: &ResolveProps, root: &std::path::Path) -> Self {
        match (&props.ts_config, props.options.entries.first(), &props.home_dir) {
            (Some(TsConfig::Path(path)), _, _) => ConfigSource::ExplicitPath(path.clone()),
            (Some(TsConfig::Options(options)), _, _) => {
                ConfigSource::ExplicitOptions(options.clone())
            }
            (None, Some(entry), Some(home)) => ConfigSource::Discovered {
                root: root.to_path_buf(),
                start_file: crate::path::join_normalized(home, entry),
            },
            _ => ConfigSource::None,
        }
    }
}

/// Outcome of an ancestor search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Number of parent steps taken before the search stopped.
    pub iterations: usize,
    /// Present only when a config file was found.
    pub file_path: Option<PathBuf>,
}

/// Outcome of [`Tsfig::resolve`](crate::Tsfig::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Anchor for relative paths inside the options.
    pub base_path: PathBuf,
    /// The config file that supplied the options, if any.
    pub config_path: Option<PathBuf>,
    /// Raw options after overrides and defaults.
    pub json_compiler_options: RawOptions,
    pub compiler_options: CompilerOptions,
    /// Advisory findings from conversion. Never fatal on their own.
    pub diagnostics: Vec<Diagnostic>,
}
