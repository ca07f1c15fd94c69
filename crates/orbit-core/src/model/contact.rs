use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ContactId;
use crate::error::CoreError;

/// Closed set of relationship categories. Display metadata is static per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Family,
    #[default]
    Friend,
    Professional,
    Romantic,
    Acquaintance,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 5] = [
        RelationshipType::Family,
        RelationshipType::Friend,
        RelationshipType::Professional,
        RelationshipType::Romantic,
        RelationshipType::Acquaintance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Family => "family",
            RelationshipType::Friend => "friend",
            RelationshipType::Professional => "professional",
            RelationshipType::Romantic => "romantic",
            RelationshipType::Acquaintance => "acquaintance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::Family => "Family",
            RelationshipType::Friend => "Friend",
            RelationshipType::Professional => "Professional",
            RelationshipType::Romantic => "Romantic",
            RelationshipType::Acquaintance => "Acquaintance",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RelationshipType::Family => "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}",
            RelationshipType::Friend => "\u{1f91d}",
            RelationshipType::Professional => "\u{1f4bc}",
            RelationshipType::Romantic => "\u{1f495}",
            RelationshipType::Acquaintance => "\u{1f44b}",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RelationshipType::Family => "#E53E3E",
            RelationshipType::Friend => "#3182CE",
            RelationshipType::Professional => "#D69E2E",
            RelationshipType::Romantic => "#D53F8C",
            RelationshipType::Acquaintance => "#718096",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown relationship type '{s}'"))
    }
}

/// How time with a person feels, from draining (-2) to nourishing (+2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Draining,
    Low,
    #[default]
    Neutral,
    Good,
    Nourishing,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 5] = [
        EnergyLevel::Draining,
        EnergyLevel::Low,
        EnergyLevel::Neutral,
        EnergyLevel::Good,
        EnergyLevel::Nourishing,
    ];

    /// Ordinal value in [-2, 2].
    pub fn value(&self) -> i8 {
        match self {
            EnergyLevel::Draining => -2,
            EnergyLevel::Low => -1,
            EnergyLevel::Neutral => 0,
            EnergyLevel::Good => 1,
            EnergyLevel::Nourishing => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Draining => "draining",
            EnergyLevel::Low => "low",
            EnergyLevel::Neutral => "neutral",
            EnergyLevel::Good => "good",
            EnergyLevel::Nourishing => "nourishing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyLevel::Draining => "Draining",
            EnergyLevel::Low => "Low",
            EnergyLevel::Neutral => "Neutral",
            EnergyLevel::Good => "Good",
            EnergyLevel::Nourishing => "Nourishing",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EnergyLevel::Draining => "#E53E3E",
            EnergyLevel::Low => "#ED8936",
            EnergyLevel::Neutral => "#A0AEC0",
            EnergyLevel::Good => "#38A169",
            EnergyLevel::Nourishing => "#3182CE",
        }
    }
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyLevel::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown energy level '{s}'"))
    }
}

/// A person being tracked. Only the store creates or removes these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub energy: EnergyLevel,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_interaction: Option<DateTime<Utc>>,
}

impl Contact {
    /// Last interaction if any, otherwise creation time.
    pub fn last_contacted(&self) -> DateTime<Utc> {
        self.last_interaction.unwrap_or(self.created_at)
    }
}

/// Input for creating a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: RelationshipType,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewContact {
    pub fn new(name: impl Into<String>, kind: RelationshipType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }
}

/// Partial update merged into an existing contact. Absent fields are left alone.
///
/// `id`, `createdAt` and `lastInteraction` are not representable here; a JSON
/// patch naming them is rejected by [`ContactUpdate::from_json`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationshipType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLevel>,
}

const IMMUTABLE_FIELDS: [&str; 5] = ["id", "createdAt", "created_at", "lastInteraction", "last_interaction"];

impl ContactUpdate {
    /// Parse a field-named patch, rejecting immutable or unknown fields.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        if let Some(obj) = value.as_object() {
            if let Some(field) = IMMUTABLE_FIELDS.iter().copied().find(|f| obj.contains_key(*f)) {
                return Err(CoreError::ImmutableField {
                    field: field.to_string(),
                });
            }
        }
        serde_json::from_value(value).map_err(|e| CoreError::InvalidUpdate(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
            && self.energy.is_none()
    }

    /// Merge into `contact`. Returns the previous energy if it changed.
    pub(crate) fn apply(self, contact: &mut Contact) -> Option<EnergyLevel> {
        if let Some(name) = self.name {
            contact.name = name.trim().to_string();
        }
        if let Some(kind) = self.kind {
            contact.kind = kind;
        }
        if let Some(notes) = self.notes {
            contact.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        }
        if let Some(tags) = self.tags {
            contact.tags = tags;
        }
        match self.energy {
            Some(energy) if energy != contact.energy => {
                let previous = contact.energy;
                contact.energy = energy;
                Some(previous)
            }
            _ => None,
        }
    }
}
