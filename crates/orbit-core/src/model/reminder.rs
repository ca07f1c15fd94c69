use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ContactId, ReminderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Completed,
}

/// A scheduled nudge to get back in touch with a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    pub contact_id: ContactId,
    pub contact_name: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ReminderStatus::Pending && self.scheduled_for <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_due() {
        let now = Utc::now();
        let mut reminder = Reminder {
            id: ReminderId::new(),
            contact_id: ContactId::from("c1"),
            contact_name: "Ada".into(),
            scheduled_for: now - Duration::hours(1),
            status: ReminderStatus::Pending,
        };
        assert!(reminder.is_due(now));
        assert!(!reminder.is_due(now - Duration::days(1)));

        reminder.status = ReminderStatus::Completed;
        assert!(!reminder.is_due(now));
    }
}
