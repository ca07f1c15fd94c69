use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::config::OrbitConfig;
use crate::error::CoreError;
use crate::model::Snapshot;

use super::Persistence;

/// Stores the snapshot as pretty JSON in a single file, guarded by `fs2` locks.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/<store_key>.json` for the given config.
    pub fn from_config(config: &OrbitConfig) -> Self {
        Self::new(config.snapshot_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar file the locks are taken on. The snapshot itself is replaced by
    /// rename, so it cannot carry the lock.
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn open_lock(&self) -> Result<fs::File, CoreError> {
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path())?;
        Ok(file)
    }

    fn write_replace(&self, json: &str) -> std::io::Result<()> {
        let temp = self.temp_path();
        let mut file = fs::File::create(&temp)?;
        let written = file.write_all(json.as_bytes()).and_then(|_| file.sync_all());
        drop(file);
        if let Err(e) = written.and_then(|_| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    /// Read under a shared lock. A missing file means nothing saved yet; an
    /// existing but blank file is corrupt.
    fn load(&self) -> Result<Option<Snapshot>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let lock = self.open_lock()?;
        fs2::FileExt::lock_shared(&lock).map_err(CoreError::Io)?;
        let read = fs::read_to_string(&self.path);
        fs2::FileExt::unlock(&lock).map_err(CoreError::Io)?;
        let data = match read {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::Io(e)),
        };

        if data.trim().is_empty() {
            return Err(CoreError::CorruptSnapshot(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        let snapshot = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), "Loaded snapshot");
        Ok(Some(snapshot))
    }

    /// Write a temp file and rename it over the snapshot under an exclusive
    /// lock, so a failed write leaves the previous snapshot intact.
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        let lock = self.open_lock()?;
        fs2::FileExt::lock_exclusive(&lock).map_err(CoreError::Io)?;
        let written = self.write_replace(&json);
        fs2::FileExt::unlock(&lock).map_err(CoreError::Io)?;
        written?;

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "Saved snapshot");
        Ok(())
    }
}
