//! Resolve the compiler options a TypeScript build should run with.
//!
//! Tsfig answers one question for a build pipeline: given a project, which
//! compiler options apply? It finds the nearest `tsconfig.json` when the caller
//! does not name one, reads it (comments, trailing commas and `extends`
//! included), forces the settings the pipeline depends on, fills a few
//! defaults and hands back both the raw JSON form and a typed form.
//!
//! ```ignore
//! let tsfig = Tsfig::builder()
//!     .root("/proj")
//!     .default_base_path(env!("CARGO_MANIFEST_DIR"))
//!     .build();
//!
//! let resolution = tsfig.resolve(
//!     &ResolveProps {
//!         options: ResolveOptions::with_entries(["index.ts"]),
//!         home_dir: Some("/proj/src".into()),
//!         ..Default::default()
//!     },
//!     None,
//! )?;
//! ```
//!
//! # Where options come from
//!
//! The first matching rule wins:
//!
//! | `tsConfig`   | `options.entries` + home dir | Source                          |
//! |--------------|------------------------------|---------------------------------|
//! | a path       | ignored                      | that file                       |
//! | an object    | ignored                      | the object itself, no file I/O  |
//! | absent       | both present                 | nearest config above 1st entry  |
//! | absent       | missing                      | nothing; options start empty    |
//!
//! A relative home dir, like a relative `tsConfig` path, is taken relative to
//! the builder's `default_base_path`.
//!
//! Discovery walks upward from the first entry's directory and stops at the
//! first config file, after checking the project root, or after 20 steps.
//! Finding nothing is not an error.
//!
//! # Base path
//!
//! Relative paths inside the options are resolved against the base path: the
//! config file's directory when a file supplied the options, otherwise the
//! caller's hint, otherwise the `default_base_path` given to the builder.
//!
//! # What gets forced
//!
//! ```text
//! moduleResolution        "node"       always
//! module                  "commonjs"   always
//! importHelpers           true         always
//! experimentalDecorators  true         always
//! allowJs                 true         always
//! jsx                     "react"      when unset
//! target                  "esnext"     always, outside production
//! target                  "es2017"     when unset, in production
//! mod                     removed      always
//! ```
//!
//! The caller's inline options are never modified; resolution works on a copy.
//!
//! # Errors and diagnostics
//!
//! A config file that was named or discovered but cannot be read or parsed
//! aborts resolution with a [`TsfigError`]. Problems with individual options
//! (unknown names, wrong types) are not errors: they come back as
//! [`Diagnostic`]s next to the result and the offending entries are left out
//! of the typed options.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`ResolveArgs`] provides
//! `--tsconfig`, `--entry`, `--home-dir` and `--production` flags that convert
//! to [`ResolveProps`].

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod convert;
mod file;
mod fs;
mod locate;
mod overrides;
mod path;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use builder::{Tsfig, TsfigBuilder};
#[cfg(feature = "clap")]
pub use cli::ResolveArgs;
pub use convert::{
    CompilerOptions, Conversion, Diagnostic, DiagnosticKind, JsxEmit, ModuleDetectionKind,
    ModuleKind, ModuleResolutionKind, ScriptTarget, convert_compiler_options,
};
pub use error::TsfigError;
pub use file::{ConfigFile, read_config_file};
pub use fs::{FileSystem, StdFileSystem};
pub use locate::{DEFAULT_FILE_NAME, DEFAULT_ITERATION_LIMIT, locate};
pub use overrides::{DEFAULT_JSX, DEVELOPMENT_TARGET, LEGACY_KEYS, PRODUCTION_DEFAULT_TARGET};
pub use types::{
    ConfigSource, Located, RawOptions, Resolution, ResolveOptions, ResolveProps, TsConfig,
};
