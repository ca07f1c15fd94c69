use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {field} must not be empty")]
    Validation { field: &'static str },

    #[error("Contact not found for interaction: {contact_id}")]
    Referential { contact_id: String },

    #[error("Not found: {id}")]
    NotFound { id: String },

    #[error("Field '{field}' is immutable and cannot be updated")]
    ImmutableField { field: String },

    #[error("Invalid contact update: {0}")]
    InvalidUpdate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    /// Load/save failures, as opposed to rejected mutations.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            CoreError::Io(_) | CoreError::Snapshot(_) | CoreError::CorruptSnapshot(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_classification() {
        let io = CoreError::Io(std::io::Error::other("disk full"));
        assert!(io.is_persistence());

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(CoreError::Snapshot(parse).is_persistence());

        assert!(!CoreError::Validation { field: "name" }.is_persistence());
        assert!(!CoreError::NotFound { id: "x".into() }.is_persistence());
    }

    #[test]
    fn test_validation_message() {
        let err = CoreError::Validation { field: "summary" };
        assert_eq!(err.to_string(), "Validation failed: summary must not be empty");
    }
}
