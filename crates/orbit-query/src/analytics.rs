use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use orbit_core::model::{Contact, EnergyLevel, RelationshipType};
use orbit_core::Store;

use crate::health::{calculate_health_score, HealthBucket};

/// Share of draining or low-energy contacts above which we warn.
const DRAINING_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDistribution {
    pub healthy: usize,
    pub moderate: usize,
    pub needs_attention: usize,
}

impl HealthDistribution {
    fn record(&mut self, bucket: HealthBucket) {
        match bucket {
            HealthBucket::Healthy => self.healthy += 1,
            HealthBucket::Moderate => self.moderate += 1,
            HealthBucket::NeedsAttention => self.needs_attention += 1,
        }
    }
}

/// Dashboard rollup across all contacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnalysis {
    pub total_contacts: usize,
    pub total_interactions: usize,
    pub by_type: BTreeMap<RelationshipType, usize>,
    /// Every energy level is present, zero if unused.
    pub by_energy: BTreeMap<EnergyLevel, usize>,
    pub health: HealthDistribution,
    pub insights: Vec<String>,
}

pub fn analyze_group(store: &Store, now: DateTime<Utc>) -> GroupAnalysis {
    let mut by_type = BTreeMap::new();
    let mut by_energy: BTreeMap<EnergyLevel, usize> =
        EnergyLevel::ALL.iter().map(|&e| (e, 0)).collect();
    let mut health = HealthDistribution::default();

    for contact in store.contacts() {
        *by_type.entry(contact.kind).or_insert(0) += 1;
        *by_energy.entry(contact.energy).or_insert(0) += 1;
        let score = calculate_health_score(store, &contact.id, now);
        health.record(HealthBucket::from_score(score));
    }

    let insights = generate_insights(dominant_type(store.contacts()), &by_energy, &health);
    GroupAnalysis {
        total_contacts: store.contacts().len(),
        total_interactions: store.interactions().len(),
        by_type,
        by_energy,
        health,
        insights,
    }
}

/// The most common relationship type.
///
/// Types are compared in the order they first appear in `contacts`; on a tie
/// the type seen later wins.
pub fn dominant_type(contacts: &[Contact]) -> Option<RelationshipType> {
    let mut counts: Vec<(RelationshipType, usize)> = Vec::new();
    for contact in contacts {
        match counts.iter_mut().find(|(kind, _)| *kind == contact.kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((contact.kind, 1)),
        }
    }
    counts
        .into_iter()
        .reduce(|best, next| if best.1 > next.1 { best } else { next })
        .map(|(kind, _)| kind)
}

/// Free-text observations driven by simple thresholds.
pub fn generate_insights(
    dominant: Option<RelationshipType>,
    by_energy: &BTreeMap<EnergyLevel, usize>,
    health: &HealthDistribution,
) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(kind) = dominant {
        insights.push(format!("Most of your contacts are {kind}"));
    }

    let total: usize = by_energy.values().sum();
    let draining = by_energy.get(&EnergyLevel::Draining).copied().unwrap_or(0)
        + by_energy.get(&EnergyLevel::Low).copied().unwrap_or(0);
    if total > 0 && draining as f64 / total as f64 > DRAINING_RATIO {
        insights.push(
            "\u{26a0}\u{fe0f} Many relationships feel draining. Consider setting boundaries.".to_string(),
        );
    }

    if health.needs_attention > health.healthy {
        insights.push("Several relationships need attention. Check in with old friends!".to_string());
    }

    insights
}
