use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::EnergyLevel;

/// One recorded energy level for a contact. Histories are kept oldest-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReading {
    pub energy: EnergyLevel,
    pub recorded_at: DateTime<Utc>,
}

/// Append a reading, dropping the oldest entries beyond `limit`.
pub fn push_reading(history: &mut Vec<EnergyReading>, reading: EnergyReading, limit: usize) {
    history.push(reading);
    if history.len() > limit {
        let excess = history.len() - limit;
        history.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_reading_trims_oldest() {
        let mut history = Vec::new();
        for energy in [EnergyLevel::Low, EnergyLevel::Neutral, EnergyLevel::Good] {
            push_reading(
                &mut history,
                EnergyReading {
                    energy,
                    recorded_at: Utc::now(),
                },
                2,
            );
        }
        let levels: Vec<_> = history.iter().map(|r| r.energy).collect();
        assert_eq!(levels, vec![EnergyLevel::Neutral, EnergyLevel::Good]);
    }
}
