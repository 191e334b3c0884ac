//! Persistence: snapshots and the stores that keep them.
//!
//! - `Snapshot`: serializable match state with validation on the way in
//! - `SnapshotStore`: `save` / `load` backend (`NullStore`, `MemoryStore`,
//!   `FileStore` with JSON or bincode encoding)

mod snapshot;
mod store;

pub use snapshot::{Snapshot, SnapshotError};
pub use store::{FileStore, MemoryStore, NullStore, PersistError, SnapshotFormat, SnapshotStore};
