use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TsfigError {
    #[error("Failed to parse {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot find base config '{specifier}' extended by {path}")]
    ExtendsNotFound { path: PathBuf, specifier: String },

    #[error("Circular 'extends' chain through {path}")]
    ExtendsCycle { path: PathBuf },
}

impl TsfigError {
    /// The config file the failure is attributed to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            TsfigError::ConfigRead { path, .. }
            | TsfigError::IoError { path, .. }
            | TsfigError::ExtendsNotFound { path, .. }
            | TsfigError::ExtendsCycle { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_read_formats_correctly() {
        let err = TsfigError::ConfigRead {
            path: "/proj/tsconfig.json".into(),
            reason: "expected value at line 3 column 5".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tsconfig.json"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn extends_not_found_mentions_specifier() {
        let err = TsfigError::ExtendsNotFound {
            path: "/proj/tsconfig.json".into(),
            specifier: "./base".into(),
        };
        assert!(err.to_string().contains("./base"));
        assert_eq!(err.path(), std::path::Path::new("/proj/tsconfig.json"));
    }
}
