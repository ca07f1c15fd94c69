use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::CoreError;
use crate::model::Snapshot;

use super::Persistence;

/// In-memory persistence for tests and embedding. Can be told to fail.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: Mutex<Option<Snapshot>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: Mutex::new(Some(snapshot)),
            ..Default::default()
        }
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The last successfully saved snapshot.
    pub fn saved(&self) -> Option<Snapshot> {
        self.saved.lock().map(|s| s.clone()).unwrap_or(None)
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Result<Option<Snapshot>, CoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(CoreError::Io(std::io::Error::other("simulated load failure")));
        }
        Ok(self.saved())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(CoreError::Io(std::io::Error::other("simulated save failure")));
        }
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| CoreError::Io(std::io::Error::other("snapshot lock poisoned")))?;
        *saved = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
