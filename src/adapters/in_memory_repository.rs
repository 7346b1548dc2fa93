//! In-memory table repository for testing.
//!
//! This adapter provides a pure in-memory implementation of TableRepository,
//! enabling fast tests without any file system I/O. Snapshots are still
//! encoded to MessagePack bytes so the serialization path is exercised.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    ports::TableRepository,
    q_learning::{QTable, serialization},
};

/// In-memory repository for testing.
///
/// All clones share the same underlying storage.
///
/// # Examples
///
/// ```
/// use qtictactoe::adapters::InMemoryRepository;
/// use qtictactoe::ports::TableRepository;
/// use qtictactoe::q_learning::QTable;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&QTable::new(), Path::new("qtable"))?;
/// assert!(repo.exists(Path::new("qtable")));
/// # Ok::<(), qtictactoe::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // a poisoned map is still a valid map
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the number of snapshots currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Clear all stored snapshots.
    pub fn clear(&self) {
        self.storage().clear();
    }

    /// Store raw bytes under `path`, e.g. to simulate a corrupt snapshot.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage().insert(path.to_string_lossy().to_string(), bytes);
    }
}

impl TableRepository for InMemoryRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let mut bytes = Vec::new();
        serialization::write_msgpack(&mut bytes, table)?;
        self.insert_raw(path, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load Q-table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        serialization::read_msgpack(bytes.as_slice())
    }

    fn exists(&self, path: &Path) -> bool {
        self.storage().contains_key(path.to_string_lossy().as_ref())
    }
}
