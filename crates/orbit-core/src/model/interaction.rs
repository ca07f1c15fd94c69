use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ContactId, InteractionId};

/// How the contact happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Call,
    Text,
    #[default]
    InPerson,
    Email,
    Video,
    Other,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 6] = [
        InteractionKind::Call,
        InteractionKind::Text,
        InteractionKind::InPerson,
        InteractionKind::Email,
        InteractionKind::Video,
        InteractionKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Call => "call",
            InteractionKind::Text => "text",
            InteractionKind::InPerson => "in_person",
            InteractionKind::Email => "email",
            InteractionKind::Video => "video",
            InteractionKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InteractionKind::Call => "Phone Call",
            InteractionKind::Text => "Text/Chat",
            InteractionKind::InPerson => "In Person",
            InteractionKind::Email => "Email",
            InteractionKind::Video => "Video Call",
            InteractionKind::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            InteractionKind::Call => "\u{1f4de}",
            InteractionKind::Text => "\u{1f4ac}",
            InteractionKind::InPerson => "\u{1f91d}",
            InteractionKind::Email => "\u{1f4e7}",
            InteractionKind::Video => "\u{1f4f9}",
            InteractionKind::Other => "\u{1f4dd}",
        }
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InteractionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        InteractionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("unknown interaction type '{s}'"))
    }
}

/// Self-reported mood at logging time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
            Mood::Positive => "positive",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negative" => Ok(Mood::Negative),
            "neutral" => Ok(Mood::Neutral),
            "positive" => Ok(Mood::Positive),
            other => Err(format!("unknown mood '{other}'")),
        }
    }
}

/// A logged event of contact with a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: InteractionId,
    pub contact_id: ContactId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

/// Input for logging an interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInteraction {
    pub contact_id: ContactId,
    #[serde(default, rename = "type")]
    pub kind: InteractionKind,
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub mood: Mood,
}

impl NewInteraction {
    pub fn new(contact_id: ContactId, summary: impl Into<String>) -> Self {
        Self {
            contact_id,
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn kind(mut self, kind: InteractionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set topics from comma-separated input.
    pub fn topics(mut self, input: &str) -> Self {
        self.topics = parse_topics(input);
        self
    }
}

/// Split comma-separated input into trimmed, non-empty, de-duplicated labels.
pub fn parse_topics(input: &str) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for topic in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !topics.iter().any(|t| t == topic) {
            topics.push(topic.to_string());
        }
    }
    topics
}
