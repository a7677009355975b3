#[cfg(test)]
pub mod test {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::io;
    use std::path::{Path, PathBuf};

    use crate::fs::FileSystem;

    /// In-memory file tree that counts every capability call.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        files: BTreeMap<PathBuf, String>,
        pub exists_calls: Cell<usize>,
        pub read_calls: Cell<usize>,
        pub checked: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }

        pub fn calls(&self) -> usize {
            self.exists_calls.get() + self.read_calls.get()
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.exists_calls.set(self.exists_calls.get() + 1);
            self.checked.borrow_mut().push(path.to_path_buf());
            self.files.contains_key(path)
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.read_calls.set(self.read_calls.get() + 1);
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    #[test]
    fn memory_fs_counts_calls() {
        let fs = MemoryFs::new().with_file("/a/tsconfig.json", "{}");
        assert!(fs.exists(Path::new("/a/tsconfig.json")));
        assert!(!fs.exists(Path::new("/b/tsconfig.json")));
        assert_eq!(fs.read_to_string(Path::new("/a/tsconfig.json")).unwrap(), "{}");
        assert_eq!(fs.exists_calls.get(), 2);
        assert_eq!(fs.read_calls.get(), 1);
        assert_eq!(fs.calls(), 3);
    }
}
