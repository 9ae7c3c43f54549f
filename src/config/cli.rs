use crate::core::Storage;
use crate::utils::error::{Result, SplitError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SplitError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SplitError::IoError(e),
        })
    }

    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(name);
        fs::write(full_path, data).map_err(|source| SplitError::Write {
            file: name.to_string(),
            source,
        })
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("out"));
        let err = storage
            .read_file(&temp_dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, SplitError::NotFound { .. }));
    }

    #[test]
    fn test_ensure_root_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("a").join("b");
        let storage = LocalStorage::new(&root);
        storage.ensure_root().unwrap();
        storage.ensure_root().unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        storage.write_file("A.json", b"first").unwrap();
        storage.write_file("A.json", b"second").unwrap();
        assert_eq!(fs::read(temp_dir.path().join("A.json")).unwrap(), b"second");
    }

    #[test]
    fn test_write_failure_names_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Taken.json")).unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        match storage.write_file("Taken.json", b"{}") {
            Err(SplitError::Write { file, .. }) => assert_eq!(file, "Taken.json"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
