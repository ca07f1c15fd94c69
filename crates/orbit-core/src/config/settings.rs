use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct OrbitConfig {
    /// Directory holding the snapshot and this config. Not persisted.
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Namespaced key the snapshot is stored under.
    pub store_key: String,
    /// Health score below which a contact needs attention.
    pub attention_threshold: u8,
    /// Energy readings kept per contact.
    pub energy_history_limit: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".orbit"),
            store_key: "orbit-contacts".to_string(),
            attention_threshold: 70,
            energy_history_limit: 30,
        }
    }
}

impl OrbitConfig {
    /// Read `<data_dir>/config.json`, falling back to defaults when absent.
    pub fn load(data_dir: &Path) -> Result<Self, CoreError> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<Self>(&raw)
                .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(CoreError::Io(e)),
        };
        config.data_dir = data_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Write config to `<data_dir>/config.json`.
    pub fn save(&self) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(self.data_dir.join(CONFIG_FILE), json)?;
        Ok(())
    }

    /// Path of the snapshot file for this config.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.store_key))
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.store_key.trim().is_empty()
            || self.store_key.contains(['/', '\\'])
        {
            return Err(CoreError::Config(format!(
                "store_key must be a plain file name, got '{}'",
                self.store_key
            )));
        }
        if self.attention_threshold > 100 {
            return Err(CoreError::Config(format!(
                "attention_threshold must be within 0..=100, got {}",
                self.attention_threshold
            )));
        }
        if self.energy_history_limit == 0 {
            return Err(CoreError::Config(
                "energy_history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = OrbitConfig::load(tmp.path()).unwrap();
        assert_eq!(config.store_key, "orbit-contacts");
        assert_eq!(config.attention_threshold, 70);
        assert_eq!(config.data_dir, tmp.path());
        assert_eq!(config.snapshot_path(), tmp.path().join("orbit-contacts.json"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let config = OrbitConfig {
            data_dir: tmp.path().to_path_buf(),
            attention_threshold: 55,
            ..Default::default()
        };
        config.save().unwrap();
        assert_eq!(OrbitConfig::load(tmp.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), r#"{"energy_history_limit": 10}"#).unwrap();
        let config = OrbitConfig::load(tmp.path()).unwrap();
        assert_eq!(config.energy_history_limit, 10);
        assert_eq!(config.store_key, "orbit-contacts");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), r#"{"store_key": "../escape"}"#).unwrap();
        assert!(matches!(OrbitConfig::load(tmp.path()), Err(CoreError::Config(_))));

        std::fs::write(tmp.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(matches!(OrbitConfig::load(tmp.path()), Err(CoreError::Config(_))));
    }
}
