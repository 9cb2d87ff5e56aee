//! Key-value backends holding JSON values.

use crate::StoreError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A flat string-keyed store of JSON values.
pub trait KeyValueStore {
    /// Get a value. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Set a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// All keys, sorted.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-process store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// A single JSON file holding one object of key to value.
///
/// Every call reads the file and every write rewrites it whole, so several
/// `FileStore`s on the same path see each other's keys. Last writer wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::NotAnObject(self.path.clone())),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file unreadable, starting empty");
                Ok(Map::new())
            }
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(path = %self.path.display(), keys = map.len(), "store file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_all()?;
        if map.remove(key).is_some() {
            self.write_all(&map)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.read_all()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.get("a").unwrap().is_none());
        store.set("a", json!(1)).unwrap();
        store.set("b", json!({"x": true})).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!(1)));
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
        store.delete("a").unwrap();
        store.delete("missing").unwrap();
        assert!(!store.exists("a").unwrap());
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path);
        assert!(store.get("cart-storage").unwrap().is_none());
        store.set("cart-storage", json!({"items": []})).unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.get("cart-storage").unwrap(),
            Some(json!({"items": []}))
        );
    }

    #[test]
    fn test_file_stores_share_a_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut first = FileStore::open(&path);
        let mut second = FileStore::open(&path);
        first.set("a", json!(1)).unwrap();
        second.set("b", json!(2)).unwrap();

        assert_eq!(first.keys().unwrap(), vec!["a", "b"]);
        second.delete("a").unwrap();
        assert!(!first.exists("a").unwrap());
    }

    #[test]
    fn test_garbage_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.keys().unwrap().is_empty());
        store.set("a", json!("ok")).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!("ok")));
    }

    #[test]
    fn test_non_object_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::open(&path);
        assert!(matches!(store.keys(), Err(StoreError::NotAnObject(_))));
    }
}
