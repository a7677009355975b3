use std::path::{Path, PathBuf};

use crate::error::TsfigError;
use crate::fs::{FileSystem, StdFileSystem};
use crate::locate::{self, DEFAULT_FILE_NAME, DEFAULT_ITERATION_LIMIT};
use crate::resolve::{self, ResolveContext};
use crate::types::{Located, Resolution, ResolveProps};

/// A configured resolver. Build one with [`Tsfig::builder()`].
///
/// Holds no per-call state; `locate` and `resolve` can be called any number
/// of times.
#[derive(Debug, Clone)]
pub struct Tsfig<F: FileSystem = StdFileSystem> {
    fs: F,
    root: PathBuf,
    default_base_path: PathBuf,
    file_name: String,
    iteration_limit: usize,
}

impl Tsfig {
    pub fn builder() -> TsfigBuilder<StdFileSystem> {
        TsfigBuilder::new()
    }
}

impl<F: FileSystem> Tsfig<F> {
    /// Search `start_dir` and its ancestors for the config file, bounded by
    /// the configured root and iteration limit.
    pub fn locate(&self, start_dir: &Path) -> Located {
        locate::locate(
            &self.fs,
            &self.root,
            start_dir,
            &self.file_name,
            self.iteration_limit,
        )
    }

    /// Produce the final compiler options for `props`.
    ///
    /// `base_path_hint` anchors relative paths when the options do not come
    /// from a file. Fails only when a designated config file cannot be read.
    pub fn resolve(
        &self,
        props: &ResolveProps,
        base_path_hint: Option<&Path>,
    ) -> Result<Resolution, TsfigError> {
        let ctx = ResolveContext {
            fs: &self.fs,
            root: &self.root,
            default_base_path: &self.default_base_path,
            file_name: &self.file_name,
            iteration_limit: self.iteration_limit,
        };
        resolve::resolve(&ctx, props, base_path_hint)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn default_base_path(&self) -> &Path {
        &self.default_base_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn iteration_limit(&self) -> usize {
        self.iteration_limit
    }
}

/// Builder for [`Tsfig`].
///
/// Every setting has a default:
///
/// - `default_base_path` → the current working directory
/// - `root` → the default base path
/// - `file_name` → `"tsconfig.json"`
/// - `iteration_limit` → 20
/// - `file_system` → the real filesystem
pub struct TsfigBuilder<F: FileSystem> {
    fs: F,
    root: Option<PathBuf>,
    default_base_path: Option<PathBuf>,
    file_name: Option<String>,
    iteration_limit: usize,
}

impl TsfigBuilder<StdFileSystem> {
    fn new() -> Self {
        Self {
            fs: StdFileSystem,
            root: None,
            default_base_path: None,
            file_name: None,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl<F: FileSystem> TsfigBuilder<F> {
    /// Set the project root. Discovery never looks above it.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the base path used when nothing else provides one, typically the
    /// directory of the host program's entry module.
    pub fn default_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_base_path = Some(path.into());
        self
    }

    /// Override the config file name searched for during discovery.
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Cap the number of parent steps during discovery. Clamped to at least 1.
    pub fn iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = limit.max(1);
        self
    }

    /// Replace the filesystem used for existence checks and reads.
    pub fn file_system<G: FileSystem>(self, fs: G) -> TsfigBuilder<G> {
        TsfigBuilder {
            fs,
            root: self.root,
            default_base_path: self.default_base_path,
            file_name: self.file_name,
            iteration_limit: self.iteration_limit,
        }
    }

    fn effective_default_base_path(&self) -> PathBuf {
        self.default_base_path.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    pub fn build(self) -> Tsfig<F> {
        let default_base_path = self.effective_default_base_path();
        let root = self.root.unwrap_or_else(|| default_base_path.clone());
        Tsfig {
            fs: self.fs,
            root,
            default_base_path,
            file_name: self
                .file_name
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            iteration_limit: self.iteration_limit,
        }
    }
}
