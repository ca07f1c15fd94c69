pub mod add;
pub mod analyze;
pub mod attention;
pub mod done;
pub mod edit;
pub mod energy;
pub mod init;
pub mod list;
pub mod log;
pub mod remind;
pub mod reminders;
pub mod rm;
pub mod sentiment;
pub mod show;
pub mod stats;
pub mod suggest;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use orbit_core::model::{ContactId, ReminderId};
use orbit_core::storage::JsonFileStore;
use orbit_core::{Applied, OrbitConfig, Store};

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and a default config.json
    Init(init::InitArgs),
    /// Add a contact
    Add(add::AddArgs),
    /// Update fields on a contact
    Edit(edit::EditArgs),
    /// Delete a contact with its interactions and reminders
    Rm(rm::RmArgs),
    /// Log an interaction with a contact
    Log(log::LogArgs),
    /// List contacts with their health scores
    List(list::ListArgs),
    /// Show a contact and its interactions
    Show(show::ShowArgs),
    /// Show contact and interaction counts
    Stats,
    /// List contacts whose health is below the attention threshold
    Attention(attention::AttentionArgs),
    /// Sentiment per contact plus an overall summary
    Sentiment,
    /// Contacts overdue for a check-in
    Suggest,
    /// Group analysis across all contacts
    Analyze,
    /// Energy history and trend for a contact
    Energy(energy::EnergyArgs),
    /// Schedule a reminder to reach out to a contact
    Remind(remind::RemindArgs),
    /// List reminders
    Reminders(reminders::RemindersArgs),
    /// Mark a reminder as completed
    Done(done::DoneArgs),
}

/// Loaded config and store for one command invocation.
pub struct Workspace {
    pub config: OrbitConfig,
    pub store: Store,
}

/// Open the store under `data_dir`.
///
/// A snapshot that exists but cannot be read is an error here, so the next
/// save cannot overwrite it with an empty store.
pub fn open(data_dir: &Path) -> Result<Workspace> {
    let config = OrbitConfig::load(data_dir)
        .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;
    let persistence = JsonFileStore::from_config(&config);
    let path = persistence.path().to_path_buf();

    let opened = Store::open(persistence);
    if let Some(e) = opened.warning {
        return Err(anyhow::Error::new(e).context(format!(
            "Failed to load {}. Fix or move the file and try again",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), contacts = opened.store.contacts().len(), "Opened store");
    Ok(Workspace {
        store: opened.store.configure(&config),
        config,
    })
}

/// Unwrap a mutation result, failing the command if it was not saved.
pub fn persisted<T>(applied: Applied<T>) -> Result<T> {
    let Applied { value, saved } = applied;
    if let Err(e) = saved {
        eprintln!("warning: the change was applied but could not be saved");
        return Err(anyhow::Error::new(e).context("Failed to save contacts"));
    }
    Ok(value)
}

/// Find a contact by full id or unique id prefix.
pub fn resolve_contact(store: &Store, query: &str) -> Result<ContactId> {
    let ids = store.contacts().iter().map(|c| c.id.as_str());
    resolve("contact", query, ids).map(ContactId::from)
}

/// Find a reminder by full id or unique id prefix.
pub fn resolve_reminder(store: &Store, query: &str) -> Result<ReminderId> {
    let ids = store.reminders().iter().map(|r| r.id.as_str());
    resolve("reminder", query, ids).map(ReminderId::from)
}

fn resolve<'a>(what: &str, query: &str, ids: impl Iterator<Item = &'a str>) -> Result<String> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("No {what} id given");
    }

    let matches: Vec<&str> = ids.filter(|id| id.starts_with(query)).collect();
    if matches.contains(&query) {
        return Ok(query.to_string());
    }
    match matches.as_slice() {
        [] => anyhow::bail!("No {what} matches '{query}'"),
        [id] => Ok((*id).to_string()),
        _ => anyhow::bail!(
            "'{query}' is ambiguous, it matches {} {what}s",
            matches.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix() {
        let ids = ["abc123", "abd456", "xyz"];
        assert_eq!(resolve("contact", "abc", ids.into_iter()).unwrap(), "abc123");
        assert_eq!(resolve("contact", "xyz", ids.into_iter()).unwrap(), "xyz");
    }

    #[test]
    fn test_resolve_ambiguous_and_missing() {
        let ids = ["abc123", "abd456"];
        let err = resolve("contact", "ab", ids.into_iter()).unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
        let err = resolve("contact", "zz", ids.into_iter()).unwrap_err();
        assert!(err.to_string().contains("No contact matches"));
        assert!(resolve("contact", "  ", ids.into_iter()).is_err());
    }

    #[test]
    fn test_resolve_exact_beats_longer_prefix_match() {
        let ids = ["abc", "abcdef"];
        assert_eq!(resolve("contact", "abc", ids.into_iter()).unwrap(), "abc");
    }
}
