use chrono::{DateTime, Utc};
use serde::Serialize;

use orbit_core::model::{Contact, ContactId};
use orbit_core::Store;

/// Interactions considered per contact, most recent first.
pub const HEALTH_WINDOW: usize = 10;
/// Days assumed since last contact when there has never been one.
pub const NEVER_CONTACTED_DAYS: i64 = 365;

const RECENCY_WEIGHT: f64 = 0.3;
const FREQUENCY_WEIGHT: f64 = 0.3;
const ENERGY_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBucket {
    Healthy,
    Moderate,
    NeedsAttention,
}

impl HealthBucket {
    /// healthy >= 70, moderate in [40, 70), needs attention < 40.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            HealthBucket::Healthy
        } else if score >= 40 {
            HealthBucket::Moderate
        } else {
            HealthBucket::NeedsAttention
        }
    }
}

/// A contact paired with its current health score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredContact<'a> {
    pub contact: &'a Contact,
    pub score: u8,
}

/// Relationship health in [0, 100].
///
/// Unknown contacts score 0. Contacts with no interactions score 100, since
/// there is no evidence of decay yet.
pub fn calculate_health_score(store: &Store, contact_id: &ContactId, now: DateTime<Utc>) -> u8 {
    let Some(contact) = store.contact(contact_id) else {
        return 0;
    };
    let count = store.interactions_for(contact_id).take(HEALTH_WINDOW).count();
    score_contact(contact, count, now)
}

/// Score a contact given how many of its recent interactions were considered.
pub fn score_contact(contact: &Contact, interaction_count: usize, now: DateTime<Utc>) -> u8 {
    if interaction_count == 0 {
        return 100;
    }

    let days_since_last = contact
        .last_interaction
        .map(|at| (now - at).num_days().max(0))
        .unwrap_or(NEVER_CONTACTED_DAYS);
    let recency = (100 - 2 * days_since_last).max(0) as f64;

    let count = interaction_count.min(HEALTH_WINDOW);
    let frequency = (10 * count).min(100) as f64;

    let energy = (f64::from(contact.energy.value()) + 2.0) / 4.0 * 100.0;

    let score = RECENCY_WEIGHT * recency + FREQUENCY_WEIGHT * frequency + ENERGY_WEIGHT * energy;
    score.round().clamp(0.0, 100.0) as u8
}

/// Every contact with its score, in store order.
pub fn score_all(store: &Store, now: DateTime<Utc>) -> Vec<ScoredContact<'_>> {
    store
        .contacts()
        .iter()
        .map(|contact| ScoredContact {
            contact,
            score: calculate_health_score(store, &contact.id, now),
        })
        .collect()
}

/// Contacts scoring below `threshold`, weakest first.
pub fn needing_attention(store: &Store, threshold: u8, now: DateTime<Utc>) -> Vec<ScoredContact<'_>> {
    let mut weak: Vec<_> = score_all(store, now)
        .into_iter()
        .filter(|s| s.score < threshold)
        .collect();
    weak.sort_by_key(|s| s.score);
    weak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use orbit_core::model::{ContactUpdate, EnergyLevel, NewContact, NewInteraction, RelationshipType};

    fn add(store: &mut Store, name: &str) -> ContactId {
        store
            .add_contact(NewContact::new(name, RelationshipType::Friend))
            .unwrap()
            .value
            .id
    }

    fn log_n(store: &mut Store, id: &ContactId, n: usize) {
        for i in 0..n {
            store
                .add_interaction(NewInteraction::new(id.clone(), format!("chat {i}")))
                .unwrap()
                .durable()
                .unwrap();
        }
    }

    fn set_energy(store: &mut Store, id: &ContactId, energy: EnergyLevel) {
        let update = ContactUpdate {
            energy: Some(energy),
            ..Default::default()
        };
        store.update_contact(id, update).unwrap().durable().unwrap();
    }

    #[test]
    fn test_unknown_contact_scores_zero() {
        let store = Store::in_memory();
        assert_eq!(calculate_health_score(&store, &"ghost".into(), Utc::now()), 0);
    }

    #[test]
    fn test_no_interactions_scores_full() {
        let mut store = Store::in_memory();
        let id = add(&mut store, "Ada");
        set_energy(&mut store, &id, EnergyLevel::Draining);
        let later = Utc::now() + Duration::days(400);
        assert_eq!(calculate_health_score(&store, &id, later), 100);
    }

    #[test]
    fn test_single_fresh_interaction() {
        let mut store = Store::in_memory();
        let id = add(&mut store, "Ada");
        log_n(&mut store, &id, 1);
        // 0.3*100 + 0.3*10 + 0.4*50
        assert_eq!(calculate_health_score(&store, &id, Utc::now()), 53);
    }

    #[test]
    fn test_recency_decay_and_rounding() {
        let mut store = Store::in_memory();
        let id = add(&mut store, "Ada");
        log_n(&mut store, &id, 1);
        let last = store.contact(&id).unwrap().last_interaction.unwrap();

        // 0.3*98 + 3 + 20 = 52.4
        assert_eq!(calculate_health_score(&store, &id, last + Duration::days(1)), 52);
        // recency bottoms out at 0 after 50 days
        assert_eq!(calculate_health_score(&store, &id, last + Duration::days(90)), 23);
    }

    #[test]
    fn test_frequency_saturates_at_window() {
        let mut store = Store::in_memory();
        let id = add(&mut store, "Ada");
        set_energy(&mut store, &id, EnergyLevel::Good);
        log_n(&mut store, &id, 14);
        // 30 + 30 + 0.4*75
        assert_eq!(calculate_health_score(&store, &id, Utc::now()), 90);
    }

    #[test]
    fn test_score_stays_in_range() {
        let now = Utc::now();
        let mut contact = Contact {
            id: "c1".into(),
            name: "Ada".into(),
            kind: RelationshipType::Friend,
            notes: None,
            tags: vec![],
            energy: EnergyLevel::Nourishing,
            created_at: now,
            // Clock skew: last interaction in the future
            last_interaction: Some(now + Duration::days(3)),
        };
        assert_eq!(score_contact(&contact, 50, now), 100);

        contact.energy = EnergyLevel::Draining;
        contact.last_interaction = None;
        assert_eq!(score_contact(&contact, 1, now), 3);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(HealthBucket::from_score(100), HealthBucket::Healthy);
        assert_eq!(HealthBucket::from_score(70), HealthBucket::Healthy);
        assert_eq!(HealthBucket::from_score(69), HealthBucket::Moderate);
        assert_eq!(HealthBucket::from_score(40), HealthBucket::Moderate);
        assert_eq!(HealthBucket::from_score(39), HealthBucket::NeedsAttention);
        assert_eq!(HealthBucket::from_score(0), HealthBucket::NeedsAttention);
    }

    #[test]
    fn test_needing_attention_sorted_weakest_first() {
        let mut store = Store::in_memory();
        let fresh = add(&mut store, "Fresh");
        let faded = add(&mut store, "Faded");
        let drained = add(&mut store, "Drained");
        add(&mut store, "Untouched");
        log_n(&mut store, &fresh, 10);
        log_n(&mut store, &faded, 1);
        log_n(&mut store, &drained, 1);
        set_energy(&mut store, &drained, EnergyLevel::Draining);

        let weak = needing_attention(&store, 70, Utc::now());
        let names: Vec<_> = weak.iter().map(|s| s.contact.name.as_str()).collect();
        // Fresh scores 80, Untouched 100; Faded 53, Drained 33
        assert_eq!(names, vec!["Drained", "Faded"]);
        assert!(weak.windows(2).all(|w| w[0].score <= w[1].score));
    }
}
