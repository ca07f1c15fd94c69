use chrono::{DateTime, Utc};
use serde::Serialize;

use orbit_core::model::{Contact, RelationshipType};
use orbit_core::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Medium,
    High,
}

/// A contact that is overdue for a check-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion<'a> {
    pub contact: &'a Contact,
    pub days_since: i64,
    pub priority: Priority,
    pub message: String,
}

/// Days without contact before a relationship of this type is overdue.
pub fn overdue_threshold(kind: RelationshipType) -> i64 {
    match kind {
        RelationshipType::Romantic => 7,
        RelationshipType::Family => 14,
        RelationshipType::Friend => 21,
        RelationshipType::Professional => 30,
        RelationshipType::Acquaintance => 60,
    }
}

/// Contacts past their type's threshold, most overdue first.
///
/// Days are counted from the last interaction, or from creation for contacts
/// never interacted with. More than twice the threshold is high priority.
pub fn follow_up_suggestions(store: &Store, now: DateTime<Utc>) -> Vec<Suggestion<'_>> {
    let mut suggestions: Vec<Suggestion<'_>> = store
        .contacts()
        .iter()
        .filter_map(|contact| suggest(contact, now))
        .collect();
    suggestions.sort_by(|a, b| b.days_since.cmp(&a.days_since));
    tracing::trace!(count = suggestions.len(), "Computed follow-up suggestions");
    suggestions
}

fn suggest(contact: &Contact, now: DateTime<Utc>) -> Option<Suggestion<'_>> {
    let days_since = (now - contact.last_contacted()).num_days();
    let threshold = overdue_threshold(contact.kind);
    if days_since <= threshold {
        return None;
    }

    let priority = if days_since > threshold * 2 {
        Priority::High
    } else {
        Priority::Medium
    };
    Some(Suggestion {
        contact,
        days_since,
        priority,
        message: format!(
            "You haven't connected with {} in {days_since} days",
            contact.name
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use orbit_core::model::{ContactId, NewContact, NewInteraction};

    fn add(store: &mut Store, name: &str, kind: RelationshipType) -> Contact {
        store
            .add_contact(NewContact::new(name, kind))
            .unwrap()
            .durable()
            .unwrap()
    }

    fn find<'a>(suggestions: &'a [Suggestion<'a>], id: &ContactId) -> Option<&'a Suggestion<'a>> {
        suggestions.iter().find(|s| &s.contact.id == id)
    }

    #[test]
    fn test_romantic_priorities() {
        let mut store = Store::in_memory();
        let partner = add(&mut store, "Sam", RelationshipType::Romantic);

        let within = follow_up_suggestions(&store, partner.created_at + Duration::days(7));
        assert!(within.is_empty());

        let ten = follow_up_suggestions(&store, partner.created_at + Duration::days(10));
        let s = find(&ten, &partner.id).unwrap();
        assert_eq!(s.days_since, 10);
        assert_eq!(s.priority, Priority::Medium);
        assert_eq!(s.message, "You haven't connected with Sam in 10 days");

        let fourteen = follow_up_suggestions(&store, partner.created_at + Duration::days(14));
        assert_eq!(find(&fourteen, &partner.id).unwrap().priority, Priority::Medium);

        let twenty = follow_up_suggestions(&store, partner.created_at + Duration::days(20));
        assert_eq!(find(&twenty, &partner.id).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_last_interaction_resets_clock() {
        let mut store = Store::in_memory();
        let mom = add(&mut store, "Mom", RelationshipType::Family);
        let interaction = store
            .add_interaction(NewInteraction::new(mom.id.clone(), "Sunday call"))
            .unwrap()
            .durable()
            .unwrap();

        let now = interaction.created_at + Duration::days(10);
        assert!(follow_up_suggestions(&store, now).is_empty());

        let now = interaction.created_at + Duration::days(15);
        let suggestions = follow_up_suggestions(&store, now);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].days_since, 15);
    }

    #[test]
    fn test_sorted_most_overdue_first() {
        let mut store = Store::in_memory();
        let acquaintance = add(&mut store, "Neighbor", RelationshipType::Acquaintance);
        let friend = add(&mut store, "Pal", RelationshipType::Friend);
        let partner = add(&mut store, "Sam", RelationshipType::Romantic);
        let colleague = add(&mut store, "Boss", RelationshipType::Professional);

        let now = Utc::now() + Duration::days(45);
        let suggestions = follow_up_suggestions(&store, now);
        let ids: Vec<_> = suggestions.iter().map(|s| &s.contact.id).collect();

        // Acquaintance threshold is 60, so it is not overdue yet
        assert!(!ids.contains(&&acquaintance.id));
        assert_eq!(ids.len(), 3);
        assert!(suggestions.windows(2).all(|w| w[0].days_since >= w[1].days_since));

        assert_eq!(find(&suggestions, &partner.id).unwrap().priority, Priority::High);
        assert_eq!(find(&suggestions, &friend.id).unwrap().priority, Priority::High);
        assert_eq!(find(&suggestions, &colleague.id).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(overdue_threshold(RelationshipType::Romantic), 7);
        assert_eq!(overdue_threshold(RelationshipType::Family), 14);
        assert_eq!(overdue_threshold(RelationshipType::Friend), 21);
        assert_eq!(overdue_threshold(RelationshipType::Professional), 30);
        assert_eq!(overdue_threshold(RelationshipType::Acquaintance), 60);
    }
}
