pub mod contact;
pub mod energy;
pub mod ids;
pub mod interaction;
pub mod reminder;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use contact::{Contact, ContactUpdate, EnergyLevel, NewContact, RelationshipType};
pub use energy::EnergyReading;
pub use ids::{ContactId, InteractionId, ReminderId};
pub use interaction::{parse_topics, Interaction, InteractionKind, Mood, NewInteraction};
pub use reminder::{Reminder, ReminderStatus};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything the store persists, in one record.
///
/// Collections are most-recent-first. `energy_history` and `reminders` default
/// to empty so snapshots written before they existed still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub energy_history: BTreeMap<ContactId, Vec<EnergyReading>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reminders: Vec<Reminder>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl Snapshot {
    /// Check the invariants a loaded snapshot must hold before the store adopts it:
    /// unique ids, non-empty names and summaries, no last interaction before
    /// creation, and no interactions, energy histories or reminders for
    /// missing contacts.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut contact_ids = HashSet::new();
        for c in &self.contacts {
            if !contact_ids.insert(&c.id) {
                return Err(corrupt(format!("duplicate contact id {}", c.id)));
            }
            if c.name.trim().is_empty() {
                return Err(corrupt(format!("contact {} has an empty name", c.id)));
            }
            if c.last_interaction.is_some_and(|at| at < c.created_at) {
                return Err(corrupt(format!(
                    "contact {} was last contacted before it was created",
                    c.id
                )));
            }
        }

        let mut interaction_ids = HashSet::new();
        for i in &self.interactions {
            if !interaction_ids.insert(&i.id) {
                return Err(corrupt(format!("duplicate interaction id {}", i.id)));
            }
            if !contact_ids.contains(&i.contact_id) {
                return Err(corrupt(format!(
                    "interaction {} references missing contact {}",
                    i.id, i.contact_id
                )));
            }
            if i.summary.trim().is_empty() {
                return Err(corrupt(format!("interaction {} has an empty summary", i.id)));
            }
        }

        if let Some(id) = self
            .energy_history
            .keys()
            .find(|id| !contact_ids.contains(id))
        {
            return Err(corrupt(format!("energy history for missing contact {id}")));
        }

        let mut reminder_ids = HashSet::new();
        for r in &self.reminders {
            if !reminder_ids.insert(&r.id) {
                return Err(corrupt(format!("duplicate reminder id {}", r.id)));
            }
            if !contact_ids.contains(&r.contact_id) {
                return Err(corrupt(format!(
                    "reminder {} references missing contact {}",
                    r.id, r.contact_id
                )));
            }
        }
        Ok(())
    }
}

fn corrupt(msg: String) -> CoreError {
    CoreError::CorruptSnapshot(msg)
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: Vec::new(),
            interactions: Vec::new(),
            energy_history: BTreeMap::new(),
            reminders: Vec::new(),
        }
    }
}
