//! Disk-backed key-value store.
//!
//! Each key becomes one JSON file under the store directory
//! (`~/.delver` by default).

use std::fs;
use std::io;
use std::path::PathBuf;

use super::KeyValueStore;

/// File-per-key store rooted at a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store under `~/.delver`, creating the directory if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(".delver"))
    }

    /// Create a store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers, but sanitize anyway so a key can
        // never escape the store directory.
        let filename: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{filename}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set_raw(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("delver-store-test-{name}"));
        fs::remove_dir_all(&dir).ok();
        FileStore::with_dir(dir).expect("Failed to create FileStore")
    }

    #[test]
    fn test_file_store_roundtrip() {
        let mut store = temp_store("roundtrip");

        assert_eq!(store.get_raw("collectedItems").unwrap(), None);
        store.set_raw("collectedItems", "[]").unwrap();
        assert_eq!(store.get_raw("collectedItems").unwrap().as_deref(), Some("[]"));

        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let mut store = temp_store("sanitize");

        store.set_raw("../escape", "\"x\"").unwrap();
        assert_eq!(store.get_raw("../escape").unwrap().as_deref(), Some("\"x\""));

        // The written file stays inside the store directory
        let entries: Vec<_> = fs::read_dir(store.dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_file_store_overwrites() {
        let mut store = temp_store("overwrite");

        store.set_raw("selectedRegion", "\"forest_depths\"").unwrap();
        store.set_raw("selectedRegion", "\"desert_oasis\"").unwrap();
        assert_eq!(
            store.get_raw("selectedRegion").unwrap().as_deref(),
            Some("\"desert_oasis\"")
        );

        fs::remove_dir_all(store.dir()).ok();
    }
}
