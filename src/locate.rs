//! Bounded upward search for the nearest config file.
//!
//! Starting at a directory, each level is checked for `{dir}/{file_name}`. The
//! walk stops at the first hit, after checking the root boundary, or once the
//! step counter reaches the iteration limit, whichever comes first. A start
//! directory outside the root never meets the root and ends on the limit.
//!
//! Not finding anything is a normal outcome: [`Located::file_path`] is `None`.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::fs::FileSystem;
use crate::path::{normalize, parent_or_self};
use crate::types::Located;

/// Default marker file name.
pub const DEFAULT_FILE_NAME: &str = "tsconfig.json";

/// Default cap on parent steps.
pub const DEFAULT_ITERATION_LIMIT: usize = 20;

/// Per-call walk state.
#[derive(Debug)]
struct SearchState {
    root: PathBuf,
    current: PathBuf,
    iterations: usize,
    iteration_limit: usize,
}

impl SearchState {
    fn new(root: &Path, start: &Path, iteration_limit: usize) -> Self {
        Self {
            root: normalize(root),
            current: normalize(start),
            iterations: 0,
            iteration_limit: iteration_limit.max(1),
        }
    }

    fn at_root(&self) -> bool {
        self.current == self.root
    }

    /// Move one level up. Returns false once the limit is reached.
    fn ascend(&mut self) -> bool {
        self.current = parent_or_self(&self.current);
        self.iterations += 1;
        self.iterations < self.iteration_limit
    }
}

/// Search `start_dir` and its ancestors for `file_name`, never past `root`.
pub fn locate(
    fs: &impl FileSystem,
    root: &Path,
    start_dir: &Path,
    file_name: &str,
    iteration_limit: usize,
) -> Located {
    let mut state = SearchState::new(root, start_dir, iteration_limit);

    loop {
        let candidate = state.current.join(file_name);
        trace!(path = %candidate.display(), "checking for config file");
        if fs.exists(&candidate) {
            debug!(
                path = %candidate.display(),
                iterations = state.iterations,
                "found config file"
            );
            return Located {
                iterations: state.iterations,
                file_path: Some(candidate),
            };
        }

        if state.at_root() || !state.ascend() {
            break;
        }
    }

    debug!(
        root = %state.root.display(),
        iterations = state.iterations,
        "no config file found"
    );
    Located {
        iterations: state.iterations,
        file_path: None,
    }
}
