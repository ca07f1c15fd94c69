pub mod json_file;
pub mod memory;

use std::sync::Arc;

use crate::error::CoreError;
use crate::model::Snapshot;

pub use json_file::JsonFileStore;
pub use memory::MemoryPersistence;

/// Durable home for store snapshots.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait Persistence {
    fn load(&self) -> Result<Option<Snapshot>, CoreError>;
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError>;
}

impl<P: Persistence + ?Sized> Persistence for Arc<P> {
    fn load(&self) -> Result<Option<Snapshot>, CoreError> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        (**self).save(snapshot)
    }
}
