//! Snapshot stores: where a match is saved between calls.
//!
//! The engine only needs `save` and `load`. Store failures never fail an
//! action; the engine logs them and reports `false`.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use super::snapshot::Snapshot;

/// Failure inside a snapshot store.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Persistence backend for snapshots.
pub trait SnapshotStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError>;

    /// The last saved snapshot, or `None` if nothing was saved yet.
    fn load(&mut self) -> Result<Option<Snapshot>, PersistError>;
}

/// Store that keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl SnapshotStore for NullStore {
    fn save(&mut self, _snapshot: &Snapshot) -> Result<(), PersistError> {
        Ok(())
    }

    fn load(&mut self) -> Result<Option<Snapshot>, PersistError> {
        Ok(None)
    }
}

/// In-memory JSON store.
///
/// Clones share the same slot, so a test can hand one clone to the engine
/// and inspect the saved text through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with saved JSON.
    #[must_use]
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(json.into()))),
        }
    }

    /// The raw saved JSON.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        let json = serde_json::to_string(snapshot)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<Snapshot>, PersistError> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}

/// On-disk encoding of a `FileStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    /// Pretty JSON, readable by peers.
    #[default]
    Json,
    /// Compact binary.
    Bincode,
}

/// Store backed by a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SnapshotFormat::Json,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self, snapshot: &Snapshot) -> Result<Vec<u8>, PersistError> {
        Ok(match self.format {
            SnapshotFormat::Json => serde_json::to_vec_pretty(snapshot)?,
            SnapshotFormat::Bincode => bincode::serialize(snapshot)?,
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Snapshot, PersistError> {
        Ok(match self.format {
            SnapshotFormat::Json => serde_json::from_slice(bytes)?,
            SnapshotFormat::Bincode => bincode::deserialize(bytes)?,
        })
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        let bytes = self.encode(snapshot)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn load(&mut self) -> Result<Option<Snapshot>, PersistError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        self.decode(&bytes).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchState;

    fn snapshot() -> Snapshot {
        MatchState::new(20, 1).to_snapshot()
    }

    #[test]
    fn test_null_store_loads_nothing() {
        let mut store = NullStore;
        store.save(&snapshot()).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let observer = MemoryStore::new();
        let mut store = observer.clone();
        assert!(store.load().unwrap().is_none());

        store.save(&snapshot()).unwrap();
        assert!(observer.raw().unwrap().contains("\"castleMaxHp\":20"));
        assert_eq!(store.load().unwrap(), Some(snapshot()));

        observer.clear();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_reports_bad_json() {
        let mut store = MemoryStore::with_json("{not json");
        assert!(matches!(store.load(), Err(PersistError::Json(_))));
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let path = std::env::temp_dir().join(format!("castle-ccg-missing-{}.json", std::process::id()));
        let mut store = FileStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }
}
