use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::OrbitConfig;
use crate::error::CoreError;
use crate::model::energy::push_reading;
use crate::model::{
    Contact, ContactId, ContactUpdate, EnergyReading, Interaction, InteractionId, NewContact,
    NewInteraction, RelationshipType, Reminder, ReminderId, ReminderStatus, Snapshot,
};
use crate::storage::{MemoryPersistence, Persistence};

/// Result of a mutation that was applied in memory.
///
/// `saved` reports whether the snapshot reached durable storage. A failed save
/// does not roll back the mutation; call [`Store::flush`] to retry.
#[derive(Debug)]
#[must_use]
pub struct Applied<T> {
    pub value: T,
    pub saved: Result<(), CoreError>,
}

impl<T> Applied<T> {
    /// The value, or the save error if the mutation is not yet durable.
    pub fn durable(self) -> Result<T, CoreError> {
        let Applied { value, saved } = self;
        saved.map(|()| value)
    }

    pub fn is_saved(&self) -> bool {
        self.saved.is_ok()
    }
}

/// A freshly opened store plus the load failure it recovered from, if any.
pub struct Opened {
    pub store: Store,
    pub warning: Option<CoreError>,
}

/// Summary counts over the current collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_contacts: usize,
    pub total_interactions: usize,
    pub by_type: BTreeMap<RelationshipType, usize>,
}

/// A contact (if it exists) and its interactions, most recent first.
#[derive(Debug, Serialize)]
pub struct ContactWithInteractions<'a> {
    pub contact: Option<&'a Contact>,
    pub interactions: Vec<&'a Interaction>,
}

/// The single owner of contacts, interactions, energy history and reminders.
///
/// Every mutation validates first, applies in memory, then saves the whole
/// snapshot through the injected [`Persistence`]. Mutations take `&mut self`,
/// so one completes (save included) before the next can start.
pub struct Store {
    snapshot: Snapshot,
    persistence: Box<dyn Persistence>,
    energy_history_limit: usize,
    dirty: bool,
}

impl Store {
    /// Load from `persistence`. A failed load yields an empty store and a warning.
    pub fn open(persistence: impl Persistence + 'static) -> Opened {
        let loaded = persistence
            .load()
            .and_then(|s| {
                if let Some(snapshot) = &s {
                    snapshot.validate()?;
                }
                Ok(s)
            });

        let (snapshot, warning) = match loaded {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    contacts = snapshot.contacts.len(),
                    interactions = snapshot.interactions.len(),
                    "Loaded store"
                );
                (snapshot, None)
            }
            Ok(None) => {
                tracing::info!("No saved store, starting empty");
                (Snapshot::default(), None)
            }
            Err(e) => {
                tracing::warn!("Failed to load store, starting empty: {e}");
                (Snapshot::default(), Some(e))
            }
        };

        Opened {
            store: Self {
                snapshot,
                persistence: Box::new(persistence),
                energy_history_limit: OrbitConfig::default().energy_history_limit,
                dirty: false,
            },
            warning,
        }
    }

    /// An empty store backed by [`MemoryPersistence`].
    pub fn in_memory() -> Self {
        Self::open(MemoryPersistence::new()).store
    }

    /// Apply settings from config.
    pub fn configure(mut self, config: &OrbitConfig) -> Self {
        self.energy_history_limit = config.energy_history_limit.max(1);
        self
    }

    // ── Reads ───────────────────────────────────────────────────────────

    /// All contacts, most recently added first.
    pub fn contacts(&self) -> &[Contact] {
        &self.snapshot.contacts
    }

    /// All interactions, most recently logged first.
    pub fn interactions(&self) -> &[Interaction] {
        &self.snapshot.interactions
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.snapshot.contacts.iter().find(|c| &c.id == id)
    }

    /// Interactions for one contact, most recently logged first.
    pub fn interactions_for<'a>(
        &'a self,
        contact_id: &ContactId,
    ) -> impl Iterator<Item = &'a Interaction> + 'a {
        let contact_id = contact_id.clone();
        self.snapshot
            .interactions
            .iter()
            .filter(move |i| i.contact_id == contact_id)
    }

    pub fn get_contact_with_interactions(&self, contact_id: &ContactId) -> ContactWithInteractions<'_> {
        ContactWithInteractions {
            contact: self.contact(contact_id),
            interactions: self.interactions_for(contact_id).collect(),
        }
    }

    pub fn get_by_type(&self, kind: RelationshipType) -> Vec<&Contact> {
        self.snapshot
            .contacts
            .iter()
            .filter(|c| c.kind == kind)
            .collect()
    }

    pub fn get_stats(&self) -> Stats {
        let mut by_type = BTreeMap::new();
        for c in &self.snapshot.contacts {
            *by_type.entry(c.kind).or_insert(0) += 1;
        }
        Stats {
            total_contacts: self.snapshot.contacts.len(),
            total_interactions: self.snapshot.interactions.len(),
            by_type,
        }
    }

    /// Recorded energy readings for a contact, oldest first.
    pub fn energy_history(&self, contact_id: &ContactId) -> &[EnergyReading] {
        self.snapshot
            .energy_history
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.snapshot.reminders
    }

    /// Pending reminders scheduled at or before `now`, soonest first.
    pub fn due_reminders(&self, now: DateTime<Utc>) -> Vec<&Reminder> {
        let mut due: Vec<&Reminder> = self
            .snapshot
            .reminders
            .iter()
            .filter(|r| r.is_due(now))
            .collect();
        due.sort_by_key(|r| r.scheduled_for);
        due
    }

    /// True when the last save failed and memory is ahead of disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn add_contact(&mut self, data: NewContact) -> Result<Applied<Contact>, CoreError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation { field: "name" });
        }

        let contact = Contact {
            id: ContactId::new(),
            name: name.to_string(),
            kind: data.kind,
            notes: data.notes.filter(|n| !n.trim().is_empty()),
            tags: clean_labels(data.tags, false),
            energy: Default::default(),
            created_at: Utc::now(),
            last_interaction: None,
        };
        self.snapshot.contacts.insert(0, contact.clone());
        tracing::debug!(contact_id = %contact.id, kind = %contact.kind, "Added contact");

        Ok(self.commit(contact))
    }

    /// Merge `updates` into a contact. Unknown ids are `NotFound`.
    ///
    /// An energy change is also appended to the contact's energy history.
    pub fn update_contact(
        &mut self,
        id: &ContactId,
        mut updates: ContactUpdate,
    ) -> Result<Applied<Contact>, CoreError> {
        if let Some(name) = &updates.name {
            if name.trim().is_empty() {
                return Err(CoreError::Validation { field: "name" });
            }
        }
        if let Some(tags) = updates.tags.take() {
            updates.tags = Some(clean_labels(tags, false));
        }

        let contact = self
            .snapshot
            .contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        if updates.apply(contact).is_some() {
            let reading = EnergyReading {
                energy: contact.energy,
                recorded_at: Utc::now(),
            };
            let history = self.snapshot.energy_history.entry(id.clone()).or_default();
            push_reading(history, reading, self.energy_history_limit);
        }
        let updated = contact.clone();
        tracing::debug!(contact_id = %id, "Updated contact");

        Ok(self.commit(updated))
    }

    /// Remove a contact together with its interactions, energy history and
    /// reminders. Unknown ids are a no-op and skip the save.
    pub fn delete_contact(&mut self, id: &ContactId) -> Applied<Option<Contact>> {
        let Some(pos) = self.snapshot.contacts.iter().position(|c| &c.id == id) else {
            return Applied {
                value: None,
                saved: Ok(()),
            };
        };

        let removed = self.snapshot.contacts.remove(pos);
        let before = self.snapshot.interactions.len();
        self.snapshot.interactions.retain(|i| &i.contact_id != id);
        self.snapshot.energy_history.remove(id);
        self.snapshot.reminders.retain(|r| &r.contact_id != id);
        tracing::debug!(
            contact_id = %id,
            interactions_removed = before - self.snapshot.interactions.len(),
            "Deleted contact"
        );

        self.commit(Some(removed))
    }

    /// Log an interaction and stamp the contact's `last_interaction` with its time.
    pub fn add_interaction(&mut self, data: NewInteraction) -> Result<Applied<Interaction>, CoreError> {
        let Some(contact) = self
            .snapshot
            .contacts
            .iter_mut()
            .find(|c| c.id == data.contact_id)
        else {
            return Err(CoreError::Referential {
                contact_id: data.contact_id.to_string(),
            });
        };

        let summary = data.summary.trim();
        if summary.is_empty() {
            return Err(CoreError::Validation { field: "summary" });
        }

        let interaction = Interaction {
            id: InteractionId::new(),
            contact_id: data.contact_id,
            kind: data.kind,
            summary: summary.to_string(),
            topics: clean_labels(data.topics, true),
            mood: data.mood,
            created_at: Utc::now(),
        };
        contact.last_interaction = Some(interaction.created_at);
        self.snapshot.interactions.insert(0, interaction.clone());
        tracing::debug!(
            interaction_id = %interaction.id,
            contact_id = %interaction.contact_id,
            "Logged interaction"
        );

        Ok(self.commit(interaction))
    }

    /// Schedule a reminder `days` from now.
    pub fn schedule_reminder(
        &mut self,
        contact_id: &ContactId,
        days: i64,
    ) -> Result<Applied<Reminder>, CoreError> {
        self.schedule_reminder_at(contact_id, Utc::now() + Duration::days(days))
    }

    pub fn schedule_reminder_at(
        &mut self,
        contact_id: &ContactId,
        scheduled_for: DateTime<Utc>,
    ) -> Result<Applied<Reminder>, CoreError> {
        let contact = self.contact(contact_id).ok_or_else(|| CoreError::Referential {
            contact_id: contact_id.to_string(),
        })?;

        let reminder = Reminder {
            id: ReminderId::new(),
            contact_id: contact_id.clone(),
            contact_name: contact.name.clone(),
            scheduled_for,
            status: ReminderStatus::Pending,
        };
        self.snapshot.reminders.push(reminder.clone());
        tracing::debug!(reminder_id = %reminder.id, contact_id = %contact_id, "Scheduled reminder");

        Ok(self.commit(reminder))
    }

    pub fn complete_reminder(&mut self, id: &ReminderId) -> Result<Applied<Reminder>, CoreError> {
        let reminder = self
            .snapshot
            .reminders
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        reminder.status = ReminderStatus::Completed;
        let completed = reminder.clone();
        tracing::debug!(reminder_id = %id, "Completed reminder");

        Ok(self.commit(completed))
    }

    /// Retry saving the current state.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.save()
    }

    fn commit<T>(&mut self, value: T) -> Applied<T> {
        Applied {
            value,
            saved: self.save(),
        }
    }

    fn save(&mut self) -> Result<(), CoreError> {
        match self.persistence.save(&self.snapshot) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to save store, changes kept in memory: {e}");
                self.dirty = true;
                Err(e)
            }
        }
    }
}

fn clean_labels(labels: Vec<String>, dedupe: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if label.is_empty() || (dedupe && out.iter().any(|l| l == label)) {
            continue;
        }
        out.push(label.to_string());
    }
    out
}
