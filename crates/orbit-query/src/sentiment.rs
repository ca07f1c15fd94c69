//! Keyword-and-mood sentiment heuristics.
//!
//! Each interaction gets a score from its self-reported mood plus keyword hits
//! in the summary. A contact's sentiment is the mean over its five most recent
//! interactions; its trend compares that mean with the five before them.

use serde::Serialize;

use orbit_core::model::{Contact, Interaction, Mood};
use orbit_core::Store;

pub const POSITIVE_KEYWORDS: [&str; 10] = [
    "great", "good", "love", "amazing", "excellent", "happy", "fun", "success", "win", "excited",
];
pub const NEGATIVE_KEYWORDS: [&str; 10] = [
    "bad", "terrible", "awful", "hate", "sad", "fail", "lost", "angry", "frustrated", "stress",
];

/// Interactions in the recent window.
pub const RECENT_WINDOW: usize = 5;
/// Interactions in the older window, ranked right after the recent ones.
pub const OLDER_WINDOW: usize = 5;
/// How far the recent mean must move from the older mean to count as a trend.
pub const TREND_MARGIN: f64 = 15.0;

const MOOD_WEIGHT: i32 = 20;
const KEYWORD_WEIGHT: i32 = 10;
const CLASS_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// No interactions to judge from.
    Unknown,
}

impl Sentiment {
    /// score >= 20 positive, score <= -20 negative, otherwise neutral.
    pub fn classify(score: f64) -> Self {
        if score >= CLASS_THRESHOLD {
            Sentiment::Positive
        } else if score <= -CLASS_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        let (emoji, color) = match self {
            Sentiment::Positive => ("\u{1f60a}", "#38A169"),
            Sentiment::Neutral => ("\u{1f610}", "#A0AEC0"),
            Sentiment::Negative => ("\u{1f614}", "#E53E3E"),
            Sentiment::Unknown => ("\u{2753}", "#718096"),
        };
        Descriptor { emoji, color }
    }

    pub fn insight(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Recent interactions are positive!",
            Sentiment::Neutral => "Interactions are generally neutral",
            Sentiment::Negative => "Recent interactions have been challenging",
            Sentiment::Unknown => "No interactions to analyze",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

/// Presentation metadata attached to a sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub emoji: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSentiment {
    pub sentiment: Sentiment,
    pub score: i32,
    pub descriptor: Descriptor,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSentiment<'a> {
    pub contact: &'a Contact,
    pub sentiment: Sentiment,
    /// Mean interaction score over the recent window.
    pub score: f64,
    pub trend: Trend,
    pub insight: &'static str,
    pub interaction_count: usize,
    pub descriptor: Descriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallInsights {
    pub positive: usize,
    pub negative: usize,
    pub improving: usize,
    pub declining: usize,
    pub summary: &'static str,
}

/// Score one interaction: mood contributes +/-20, and every lowercase word
/// containing a positive keyword adds 10 while one containing a negative
/// keyword subtracts 10. A word can hit both lists.
pub fn analyze_interaction(summary: &str, mood: Mood) -> InteractionSentiment {
    let mut score = match mood {
        Mood::Positive => MOOD_WEIGHT,
        Mood::Negative => -MOOD_WEIGHT,
        Mood::Neutral => 0,
    };

    for word in summary.to_lowercase().split_whitespace() {
        if POSITIVE_KEYWORDS.iter().any(|k| word.contains(k)) {
            score += KEYWORD_WEIGHT;
        }
        if NEGATIVE_KEYWORDS.iter().any(|k| word.contains(k)) {
            score -= KEYWORD_WEIGHT;
        }
    }

    let sentiment = Sentiment::classify(f64::from(score));
    InteractionSentiment {
        sentiment,
        score,
        descriptor: sentiment.descriptor(),
    }
}

/// Analyze one contact from its interactions in the store.
pub fn analyze_contact<'a>(store: &'a Store, contact: &'a Contact) -> ContactSentiment<'a> {
    let interactions: Vec<&Interaction> = store.interactions_for(&contact.id).collect();
    let (sentiment, score, trend) = summarize(&interactions);
    ContactSentiment {
        contact,
        sentiment,
        score,
        trend,
        insight: sentiment.insight(),
        interaction_count: interactions.len(),
        descriptor: sentiment.descriptor(),
    }
}

/// Analyze every contact, in store order.
pub fn analyze_all(store: &Store) -> Vec<ContactSentiment<'_>> {
    store
        .contacts()
        .iter()
        .map(|contact| analyze_contact(store, contact))
        .collect()
}

/// Sentiment, mean score and trend for interactions ordered most recent first.
pub fn summarize(interactions: &[&Interaction]) -> (Sentiment, f64, Trend) {
    if interactions.is_empty() {
        return (Sentiment::Unknown, 0.0, Trend::Stable);
    }

    let recent = &interactions[..interactions.len().min(RECENT_WINDOW)];
    let avg = mean_score(recent);

    let older_end = interactions.len().min(RECENT_WINDOW + OLDER_WINDOW);
    let older = &interactions[recent.len()..older_end];
    let trend = if older.is_empty() {
        Trend::Stable
    } else {
        let older_avg = mean_score(older);
        if avg > older_avg + TREND_MARGIN {
            Trend::Improving
        } else if avg < older_avg - TREND_MARGIN {
            Trend::Declining
        } else {
            Trend::Stable
        }
    };

    (Sentiment::classify(avg), avg, trend)
}

fn mean_score(window: &[&Interaction]) -> f64 {
    let total: i32 = window
        .iter()
        .map(|i| analyze_interaction(&i.summary, i.mood).score)
        .sum();
    f64::from(total) / window.len() as f64
}

pub fn overall_insights(results: &[ContactSentiment<'_>]) -> OverallInsights {
    let with_sentiment = |s: Sentiment| results.iter().filter(|r| r.sentiment == s).count();
    let with_trend = |t: Trend| results.iter().filter(|r| r.trend == t).count();
    let positive = with_sentiment(Sentiment::Positive);
    let negative = with_sentiment(Sentiment::Negative);
    let improving = with_trend(Trend::Improving);
    let declining = with_trend(Trend::Declining);

    let summary = if positive > negative {
        "Overall, your relationships are trending positive! \u{1f389}"
    } else if negative > 0 {
        "Some relationships need attention. Check the details below."
    } else {
        "Your relationships are generally stable."
    };

    OverallInsights {
        positive,
        negative,
        improving,
        declining,
        summary,
    }
}
