//! Clap adapter for tsfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`ResolveArgs`] in your own clap derive and call
//! [`ResolveArgs::into_props()`] to get the framework-agnostic
//! [`ResolveProps`](crate::ResolveProps) the resolver takes.
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     ts: ResolveArgs,
//! }
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::types::{RawOptions, ResolveOptions, ResolveProps, TsConfig};

/// Clap-derived args describing where compiler options come from.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Path to a tsconfig file, or inline compiler options as a JSON object.
    #[arg(long = "tsconfig", value_name = "PATH|JSON")]
    pub ts_config: Option<String>,

    /// Entry point, relative to --home-dir. The first one seeds discovery.
    #[arg(long = "entry", value_name = "PATH")]
    pub entries: Vec<String>,

    /// Directory the entry points are relative to.
    #[arg(long, value_name = "DIR")]
    pub home_dir: Option<PathBuf>,

    /// Resolve for a production build.
    #[arg(long)]
    pub production: bool,
}

impl ResolveArgs {
    /// Convert to [`ResolveProps`].
    ///
    /// A `--tsconfig` value that starts with `{` must parse as a JSON object;
    /// anything else is taken as a path.
    pub fn into_props(self) -> Result<ResolveProps, serde_json::Error> {
        let ts_config = match self.ts_config {
            Some(value) if value.trim_start().starts_with('{') => {
                Some(TsConfig::Options(serde_json::from_str::<RawOptions>(&value)?))
            }
            Some(value) => Some(TsConfig::Path(PathBuf::from(value))),
            None => None,
        };
        Ok(ResolveProps {
            ts_config,
            options: ResolveOptions {
                entries: self.entries,
            },
            home_dir: self.home_dir,
            production: self.production,
        })
    }
}
