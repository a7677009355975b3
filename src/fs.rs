use std::io;
use std::path::Path;

/// Read-only filesystem access used during discovery and config reading.
///
/// Swappable so resolution can run against synthetic trees.
pub trait FileSystem {
    /// True if `path` names an existing regular file.
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn std_exists_only_for_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(StdFileSystem.exists(&dir.path().join("tsconfig.json")));
        assert!(!StdFileSystem.exists(&dir.path().join("sub")));
        assert!(!StdFileSystem.exists(&dir.path().join("missing.json")));
    }

    #[test]
    fn std_read_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = StdFileSystem
            .read_to_string(&dir.path().join("missing.json"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
