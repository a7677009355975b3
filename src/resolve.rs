//! Core resolution pipeline: pick a source, read raw options, normalize them.
//!
//! Steps:
//!
//! 1. Select the [`ConfigSource`] from the caller's props
//! 2. Read raw options from it (explicit file, inline object, discovered file,
//!    or nothing)
//! 3. Settle the base path: the config file's directory, else the caller's
//!    hint, else the injected default
//! 4. Apply overrides, defaults and legacy-key removal
//! 5. Convert to typed options, collecting diagnostics
//!
//! Only step 2 can fail, and only when a designated config file cannot be read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::convert::convert_compiler_options;
use crate::error::TsfigError;
use crate::file::{ConfigFile, read_config_file};
use crate::fs::FileSystem;
use crate::locate::locate;
use crate::overrides;
use crate::path::{join_normalized, parent_or_self};
use crate::types::{ConfigSource, RawOptions, Resolution, ResolveProps};

/// Everything the pipeline needs besides the caller's props.
pub struct ResolveContext<'a, F: FileSystem> {
    pub fs: &'a F,
    /// Upper boundary for discovery.
    pub root: &'a Path,
    /// Last-resort base path; also anchors a relative explicit config path or
    /// home dir.
    pub default_base_path: &'a Path,
    pub file_name: &'a str,
    pub iteration_limit: usize,
}

/// Raw options and where they came from.
struct Loaded {
    options: RawOptions,
    file: Option<PathBuf>,
    base_path: Option<PathBuf>,
}

impl Loaded {
    fn empty() -> Self {
        Self {
            options: RawOptions::new(),
            file: None,
            base_path: None,
        }
    }

    fn from_file(file: ConfigFile) -> Self {
        Self {
            base_path: Some(file.dir()),
            file: Some(file.path),
            options: file.compiler_options,
        }
    }
}

/// Resolve compiler options for `props`.
///
/// `base_path_hint` is used when the source itself does not fix a base path
/// (inline options, or nothing found).
pub fn resolve<F: FileSystem>(
    ctx: &ResolveContext<'_, F>,
    props: &ResolveProps,
    base_path_hint: Option<&Path>,
) -> Result<Resolution, TsfigError> {
    let source = ConfigSource::select(props, ctx.root);
    debug!(?source, "selected config source");

    let loaded = load(ctx, source)?;

    let base_path = loaded
        .base_path
        .or_else(|| base_path_hint.map(Path::to_path_buf))
        .unwrap_or_else(|| ctx.default_base_path.to_path_buf());
    debug!(base_path = %base_path.display(), "settled base path");

    let json_compiler_options = overrides::apply(loaded.options, props.production);
    let conversion = convert_compiler_options(&json_compiler_options, &base_path);
    if !conversion.diagnostics.is_empty() {
        debug!(
            count = conversion.diagnostics.len(),
            "compiler option conversion reported diagnostics"
        );
    }

    Ok(Resolution {
        base_path,
        config_path: loaded.file,
        json_compiler_options,
        compiler_options: conversion.options,
        diagnostics: conversion.diagnostics,
    })
}

fn load<F: FileSystem>(
    ctx: &ResolveContext<'_, F>,
    source: ConfigSource,
) -> Result<Loaded, TsfigError> {
    match source {
        ConfigSource::ExplicitPath(path) => {
            let path = join_normalized(ctx.default_base_path, path);
            read_config_file(ctx.fs, &path).map(Loaded::from_file)
        }
        ConfigSource::ExplicitOptions(options) => Ok(Loaded {
            options,
            ..Loaded::empty()
        }),
        ConfigSource::Discovered { root, start_file } => {
            let start_file = join_normalized(ctx.default_base_path, start_file);
            let located = locate(
                ctx.fs,
                &root,
                &parent_or_self(&start_file),
                ctx.file_name,
                ctx.iteration_limit,
            );
            match located.file_path {
                Some(path) => read_config_file(ctx.fs, &path).map(Loaded::from_file),
                None => Ok(Loaded::empty()),
            }
        }
        ConfigSource::None => Ok(Loaded::empty()),
    }
}
