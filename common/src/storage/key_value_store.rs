use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Raw string storage addressed by a fixed key, the local equivalent of a
/// browser's per-site storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, content: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Stores every key as `<directory>/<key>.yaml`.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    directory: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(format!("Invalid storage key: {:?}", key));
        }
        Ok(self.directory.join(format!("{}.yaml", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read {}: {}", path.display(), err)),
            },
        }
    }

    fn set(&self, key: &str, content: &str) -> Result<(), String> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.directory).map_err(|e| {
            format!(
                "Failed to create storage directory {}: {}",
                self.directory.display(),
                e
            )
        })?;
        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(format!("Failed to remove {}: {}", path.display(), err)),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| "Memory store lock poisoned".to_string())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, content: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Memory store lock poisoned".to_string())?;
        entries.insert(key.to_string(), content.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Memory store lock poisoned".to_string())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("arcade_store_test_{}", random_number));
        path
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let store = FileKeyValueStore::new(get_temp_dir());

        assert_eq!(store.get("snake-highscore").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_directory_on_write() {
        let dir = get_temp_dir();
        let store = FileKeyValueStore::new(dir.clone());

        store.set("tictactoe-scores", "X: 1\nO: 2\n").unwrap();

        assert!(dir.join("tictactoe-scores.yaml").exists());
        assert_eq!(
            store.get("tictactoe-scores").unwrap().as_deref(),
            Some("X: 1\nO: 2\n")
        );
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() {
        let store = FileKeyValueStore::new(get_temp_dir());

        assert!(store.remove("snakes-scores").is_ok());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let store = FileKeyValueStore::new(get_temp_dir());

        assert!(store.get("../escape").is_err());
        assert!(store.set("", "content").is_err());
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.is_empty());

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(store.len(), 1);

        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryKeyValueStore::new();
        let other = store.clone();

        store.set("key", "value").unwrap();

        assert_eq!(other.get("key").unwrap().as_deref(), Some("value"));
    }
}
