//! Reading `tsconfig.json`-style files.
//!
//! Config files are parsed as JSON5, so `//` and `/* */` comments and
//! trailing commas are accepted. Only two top-level keys matter here:
//!
//! - `compilerOptions`: the raw options object (absent means empty).
//! - `extends`: a string or an array of strings naming base configs.
//!
//! # Extends
//!
//! Each base is read recursively and layered underneath the extending file
//! one top-level option at a time: an option set by the extending file
//! replaces the base's value wholesale, objects such as `paths` included.
//! With an array, later bases override earlier ones. Relative path options coming from a base file are
//! rebased onto that file's directory before merging.
//!
//! Specifiers starting with `./`, `../` or `/` are resolved against the
//! extending file's directory, trying the path as written and then with a
//! `.json` suffix. Anything else is a package name looked up in
//! `node_modules` directories from the extending file upward.
//!
//! Any failure here aborts resolution: a designated config file that cannot
//! be read is never replaced by defaults.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::TsfigError;
use crate::fs::FileSystem;
use crate::path::{join_normalized, normalize, parent_or_self};
use crate::types::RawOptions;

/// Option names whose values are filesystem paths.
pub(crate) const PATH_OPTIONS: &[&str] = &[
    "baseUrl",
    "rootDir",
    "outDir",
    "outFile",
    "declarationDir",
    "tsBuildInfoFile",
];

/// Option names whose values are arrays of filesystem paths.
pub(crate) const PATH_LIST_OPTIONS: &[&str] = &["rootDirs", "typeRoots"];

/// A config file after `extends` has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub compiler_options: RawOptions,
}

impl ConfigFile {
    /// Directory containing the file; the anchor for its relative paths.
    pub fn dir(&self) -> PathBuf {
        parent_or_self(&self.path)
    }
}

/// Read a config file and everything it extends.
pub fn read_config_file(fs: &impl FileSystem, path: &Path) -> Result<ConfigFile, TsfigError> {
    let path = normalize(path);
    let mut chain = Vec::new();
    let compiler_options = read_chain(fs, &path, &mut chain)?;
    Ok(ConfigFile {
        path,
        compiler_options,
    })
}

fn read_chain(
    fs: &impl FileSystem,
    path: &Path,
    chain: &mut Vec<PathBuf>,
) -> Result<RawOptions, TsfigError> {
    if chain.iter().any(|p| p == path) {
        return Err(TsfigError::ExtendsCycle {
            path: path.to_path_buf(),
        });
    }
    chain.push(path.to_path_buf());

    let content = fs
        .read_to_string(path)
        .map_err(|e| TsfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
    let document = parse_document(&content).map_err(|reason| TsfigError::ConfigRead {
        path: path.to_path_buf(),
        reason,
    })?;

    let mut merged = RawOptions::new();
    for specifier in &document.extends {
        let base_path = resolve_extends(fs, path, specifier)?;
        debug!(
            config = %path.display(),
            base = %base_path.display(),
            "applying extended config"
        );
        let base = read_chain(fs, &base_path, chain)?;
        let base = rebase_paths(base, &parent_or_self(&base_path));
        merged.extend(base);
    }

    chain.pop();
    merged.extend(document.compiler_options);
    Ok(merged)
}

#[derive(Debug, Default)]
struct Document {
    compiler_options: RawOptions,
    extends: Vec<String>,
}

fn parse_document(content: &str) -> Result<Document, String> {
    if content.trim().is_empty() {
        return Ok(Document::default());
    }

    let value: Value = json5::from_str(content).map_err(|e| e.to_string())?;
    let Value::Object(mut root) = value else {
        return Err("top-level value must be an object".into());
    };

    let compiler_options = match root.remove("compilerOptions") {
        None | Some(Value::Null) => RawOptions::new(),
        Some(Value::Object(map)) => map,
        Some(_) => return Err("'compilerOptions' must be an object".into()),
    };

    let extends = match root.remove("extends") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err("'extends' entries must be strings".to_string()),
            })
            .collect::<Result<_, _>>()?,
        Some(_) => return Err("'extends' must be a string or an array of strings".into()),
    };

    Ok(Document {
        compiler_options,
        extends,
    })
}

fn resolve_extends(
    fs: &impl FileSystem,
    from: &Path,
    specifier: &str,
) -> Result<PathBuf, TsfigError> {
    let dir = parent_or_self(from);
    let is_relative = specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == "..";

    let found = if is_relative || Path::new(specifier).is_absolute() {
        first_existing(fs, &with_json_suffix(&join_normalized(&dir, specifier)))
    } else {
        find_in_node_modules(fs, &dir, specifier)
    };

    found.ok_or_else(|| TsfigError::ExtendsNotFound {
        path: from.to_path_buf(),
        specifier: specifier.to_string(),
    })
}

fn find_in_node_modules(fs: &impl FileSystem, start: &Path, specifier: &str) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let package = join_normalized(&dir.join("node_modules"), specifier);
        let mut candidates = with_json_suffix(&package);
        candidates.push(package.join("tsconfig.json"));
        if let Some(found) = first_existing(fs, &candidates) {
            return Some(found);
        }

        let parent = parent_or_self(&dir);
        if parent == dir {
            return None;
        }
        dir = parent;
    }
}

/// `path` as written, plus `path.json` when it lacks that suffix.
fn with_json_suffix(path: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![path.to_path_buf()];
    if path.extension().is_none_or(|ext| ext != "json") {
        let mut suffixed = path.as_os_str().to_owned();
        suffixed.push(".json");
        candidates.push(PathBuf::from(suffixed));
    }
    candidates
}

fn first_existing(fs: &impl FileSystem, candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|c| fs.exists(c)).cloned()
}

/// Make relative path options absolute against `dir`.
fn rebase_paths(mut options: RawOptions, dir: &Path) -> RawOptions {
    let rebase = |value: &mut Value| {
        if let Value::String(s) = value
            && !Path::new(s.as_str()).is_absolute()
        {
            *s = join_normalized(dir, s.as_str()).to_string_lossy().into_owned();
        }
    };

    for key in PATH_OPTIONS {
        if let Some(value) = options.get_mut(*key) {
            rebase(value);
        }
    }
    for key in PATH_LIST_OPTIONS {
        if let Some(Value::Array(items)) = options.get_mut(*key) {
            items.iter_mut().for_each(|item| rebase(item));
        }
    }
    options
}
