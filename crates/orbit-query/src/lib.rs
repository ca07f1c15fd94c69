//! Derived views over an Orbit [`orbit_core::Store`].
//!
//! Every engine here is a pure function of the store contents and an explicit
//! `now`, so results are reproducible in tests.

pub mod analytics;
pub mod energy;
pub mod health;
pub mod sentiment;
pub mod suggestions;

pub use analytics::{analyze_group, GroupAnalysis, HealthDistribution};
pub use energy::{energy_average, energy_trend};
pub use health::{calculate_health_score, needing_attention, score_all, HealthBucket, ScoredContact};
pub use sentiment::{
    analyze_all, analyze_contact, analyze_interaction, overall_insights, ContactSentiment,
    InteractionSentiment, OverallInsights, Sentiment, Trend,
};
pub use suggestions::{follow_up_suggestions, Priority, Suggestion};
