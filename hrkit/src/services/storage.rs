//! Storage backends for the activity log
//!
//! `FileStorage` keeps one JSON file per slot and replaces it atomically on
//! every write. `MemoryStorage` keeps slots in process memory.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use shared::{Component, component_debug};
use uuid::Uuid;

use crate::error::{ToolkitError, ToolkitResult};
use crate::traits::StorageBackend;

/// File-backed storage, one `<key>.json` per slot
pub struct FileStorage {
    /// Directory holding the slot files
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create file storage rooted at `./data`
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("./data"),
        }
    }

    /// Create with custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn validate_key(operation: &str, key: &str) -> ToolkitResult<()> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if valid {
            Ok(())
        } else {
            Err(ToolkitError::storage(operation, key, "slot name must be a plain file name"))
        }
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> ToolkitResult<Option<String>> {
        Self::validate_key("read", key)?;

        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ToolkitError::storage("read", key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> ToolkitResult<()> {
        Self::validate_key("write", key)?;

        fs::create_dir_all(&self.base_dir).map_err(|e| ToolkitError::storage("write", key, e))?;

        // Temp file lives in the same directory so the rename stays on one filesystem
        let temp_path = self
            .base_dir
            .join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));
        let target_path = self.slot_path(key);

        let result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &target_path)
        })();

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(ToolkitError::storage("write", key, e));
        }

        component_debug!(Component::History, "💾 Wrote slot {} ({} bytes)", target_path.display(), value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> ToolkitResult<()> {
        Self::validate_key("remove", key)?;

        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => {
                component_debug!(Component::History, "🗑️ Removed slot {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ToolkitError::storage("remove", key, e)),
        }
    }
}

/// In-memory storage; clones share the same slots
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, operation: &str, key: &str) -> ToolkitResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| ToolkitError::storage(operation, key, "storage lock poisoned"))
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> ToolkitResult<Option<String>> {
        Ok(self.lock("read", key)?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> ToolkitResult<()> {
        self.lock("write", key)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ToolkitResult<()> {
        self.lock("remove", key)?.remove(key);
        Ok(())
    }
}
